//! Replacement templates for regex rewrites
//!
//! Templates use backslash syntax for back-references: `\g<1>`, `\1` and
//! `\g<name>` refer to capture groups, and `\n`, `\t`, `\\` and friends are
//! character escapes. A `$` is an ordinary character.
//!
//! Parsing happens when the rewrite is built; whether referenced groups
//! exist in the pattern is only checked when a substitution is performed.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::errors::{config_error, substitution_error, Error, Result};

static GROUP_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Failed to compile regex pattern for GROUP_NAME")
});

/// Reference to a capture group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupRef {
    /// Group by position, 0 being the whole match
    Index(usize),
    /// Named group
    Name(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum TemplatePart {
    Literal(String),
    Group(GroupRef),
}

/// A parsed replacement template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTemplate {
    parts: Vec<TemplatePart>,
}

impl ReplacementTemplate {
    /// Parses a replacement template
    ///
    /// # Errors
    /// Returns a configuration error for a dangling backslash, an unknown
    /// letter escape or a malformed `\g<...>` reference
    pub fn parse(template: &str) -> Result<Self> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '\\' {
                literal.push(c);
                continue;
            }

            let Some(escaped) = chars.next() else {
                return Err(template_error(template, "bad escape (end of template)"));
            };

            let group = match escaped {
                'g' => Some(parse_named_reference(template, &mut chars)?),
                '0' => {
                    let mut code = 0u32;
                    for _ in 0..2 {
                        match chars.peek().and_then(|d| d.to_digit(8)) {
                            Some(digit) => {
                                code = code * 8 + digit;
                                chars.next();
                            }
                            None => break,
                        }
                    }
                    // At most 0o77, always a valid char
                    literal.push(char::from_u32(code).unwrap_or('\0'));
                    None
                }
                '1'..='9' => {
                    let mut index = escaped.to_digit(10).unwrap_or(0) as usize;
                    if let Some(digit) = chars.peek().and_then(|d| d.to_digit(10)) {
                        index = index * 10 + digit as usize;
                        chars.next();
                    }
                    Some(GroupRef::Index(index))
                }
                '\\' => {
                    literal.push('\\');
                    None
                }
                'n' => {
                    literal.push('\n');
                    None
                }
                't' => {
                    literal.push('\t');
                    None
                }
                'r' => {
                    literal.push('\r');
                    None
                }
                'a' => {
                    literal.push('\x07');
                    None
                }
                'b' => {
                    literal.push('\x08');
                    None
                }
                'f' => {
                    literal.push('\x0c');
                    None
                }
                'v' => {
                    literal.push('\x0b');
                    None
                }
                other if other.is_ascii_alphabetic() => {
                    return Err(template_error(template, &format!("bad escape \\{other}")));
                }
                other => {
                    literal.push('\\');
                    literal.push(other);
                    None
                }
            };

            if let Some(group) = group {
                if !literal.is_empty() {
                    parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                }
                parts.push(TemplatePart::Group(group));
            }
        }

        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }

        Ok(ReplacementTemplate { parts })
    }

    /// Checks that every referenced group exists in `pattern`
    ///
    /// # Errors
    /// Returns a substitution error naming the first missing group
    pub fn check_groups(&self, pattern: &Regex) -> Result<()> {
        for part in &self.parts {
            match part {
                TemplatePart::Group(GroupRef::Index(index)) if *index >= pattern.captures_len() => {
                    return Err(substitution_error(
                        pattern.as_str(),
                        &format!("invalid group reference {index}"),
                    ));
                }
                TemplatePart::Group(GroupRef::Name(name))
                    if !pattern.capture_names().flatten().any(|n| n == name.as_str()) =>
                {
                    return Err(substitution_error(
                        pattern.as_str(),
                        &format!("unknown group name '{name}'"),
                    ));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Appends the expansion of the template for one match to `output`
    ///
    /// Groups that did not take part in the match expand to nothing.
    /// Call [`check_groups`](Self::check_groups) first; unknown groups are
    /// treated the same way here.
    pub fn expand_into(&self, captures: &Captures<'_>, output: &mut String) {
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => output.push_str(text),
                TemplatePart::Group(GroupRef::Index(index)) => {
                    if let Some(m) = captures.get(*index) {
                        output.push_str(m.as_str());
                    }
                }
                TemplatePart::Group(GroupRef::Name(name)) => {
                    if let Some(m) = captures.name(name) {
                        output.push_str(m.as_str());
                    }
                }
            }
        }
    }
}

fn parse_named_reference<I>(template: &str, chars: &mut std::iter::Peekable<I>) -> Result<GroupRef>
where
    I: Iterator<Item = char>,
{
    if chars.next() != Some('<') {
        return Err(template_error(template, "missing <"));
    }

    let mut name = String::new();
    loop {
        match chars.next() {
            Some('>') => break,
            Some(c) => name.push(c),
            None => return Err(template_error(template, "missing >, unterminated name")),
        }
    }

    if name.is_empty() {
        return Err(template_error(template, "missing group name"));
    }
    if name.chars().all(|c| c.is_ascii_digit()) {
        return name
            .parse::<usize>()
            .map(GroupRef::Index)
            .map_err(|_| template_error(template, &format!("invalid group reference {name}")));
    }
    if !GROUP_NAME.is_match(&name) {
        return Err(template_error(
            template,
            &format!("bad character in group name '{name}'"),
        ));
    }

    Ok(GroupRef::Name(name))
}

fn template_error(template: &str, detail: &str) -> Error {
    config_error(&format!("Invalid replacement template '{template}': {detail}"))
}
