//! Validated rewrite rules
//!
//! A [`RewriteRule`] can only be obtained from [`RewriteRule::from_settings`],
//! which rejects every malformed shape of [`RewriteSettings`].

use regex::Regex;
use serde_yaml::Value;

use crate::constants::{FIND_KEY, REGEX_FIND_KEY, REGEX_REPLACE_KEY, REPLACE_KEY};
use crate::errors::{config_error, invalid_pattern_error, Result};

use super::settings::{describe_value, RewriteSettings};
use super::template::ReplacementTemplate;

/// Regex substitution with a compiled pattern and parsed template
#[derive(Debug, Clone)]
pub struct RegexRewrite {
    pattern: Regex,
    replacement: ReplacementTemplate,
}

impl RegexRewrite {
    /// Compiles the pattern and parses the replacement template
    ///
    /// # Errors
    /// Returns a configuration error if either one is malformed
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|e| invalid_pattern_error(e, pattern))?;
        let replacement = ReplacementTemplate::parse(replacement)?;

        Ok(RegexRewrite {
            pattern: compiled,
            replacement,
        })
    }

    /// Replaces every non-overlapping match in `name`
    ///
    /// # Errors
    /// Returns a substitution error if the template references a group the
    /// pattern does not define, whether or not the pattern matches
    pub fn apply(&self, name: &str) -> Result<String> {
        self.replacement.check_groups(&self.pattern)?;

        let mut output = String::with_capacity(name.len());
        let mut last_end = 0;
        for captures in self.pattern.captures_iter(name) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            output.push_str(&name[last_end..whole.start()]);
            self.replacement.expand_into(&captures, &mut output);
            last_end = whole.end();
        }
        output.push_str(&name[last_end..]);

        Ok(output)
    }
}

/// A validated name rewrite
#[derive(Debug, Clone)]
pub enum RewriteRule {
    /// Replace every occurrence of `find` with `replace`
    Literal { find: String, replace: String },
    /// Regex substitution
    Regex(RegexRewrite),
    /// Literal replacement followed by regex substitution on its result
    Both {
        find: String,
        replace: String,
        regex: RegexRewrite,
    },
}

impl RewriteRule {
    /// Validates raw settings and builds the matching rule
    ///
    /// Accepted key sets are `{find, replace}`, `{regex_find, regex_replace}`
    /// or all four keys. All values must be strings.
    ///
    /// # Errors
    /// Returns a configuration error naming the settings for any other key
    /// set, for non-string values, and for a malformed pattern or template
    ///
    /// # Examples
    /// ```
    /// use name_rewrite::rewrite::{RewriteRule, RewriteSettings};
    ///
    /// let settings = RewriteSettings::from([("find", "a"), ("repl", "b")]);
    /// let error = RewriteRule::from_settings(&settings).unwrap_err();
    /// assert!(error.is_config_error());
    /// ```
    pub fn from_settings(settings: &RewriteSettings) -> Result<Self> {
        let literal_keys = [FIND_KEY, REPLACE_KEY];
        let regex_keys = [REGEX_FIND_KEY, REGEX_REPLACE_KEY];

        let has_all = |keys: &[&str]| keys.iter().all(|key| settings.contains_key(key));
        let only_known = settings
            .keys()
            .all(|key| literal_keys.contains(&key) || regex_keys.contains(&key));
        let has_literal = has_all(&literal_keys[..]);
        let has_regex = has_all(&regex_keys[..]);
        let complete_pairs = (has_literal as usize + has_regex as usize) * 2;

        if !only_known || !(has_literal || has_regex) || settings.len() != complete_pairs {
            return Err(config_error(&format!(
                "Invalid replace settings {settings}: expected '{FIND_KEY}' and '{REPLACE_KEY}', \
                 '{REGEX_FIND_KEY}' and '{REGEX_REPLACE_KEY}', or all four"
            )));
        }

        let literal = if has_literal {
            Some((
                string_setting(settings, FIND_KEY)?,
                string_setting(settings, REPLACE_KEY)?,
            ))
        } else {
            None
        };

        let regex = if has_regex {
            Some(RegexRewrite::new(
                &string_setting(settings, REGEX_FIND_KEY)?,
                &string_setting(settings, REGEX_REPLACE_KEY)?,
            )?)
        } else {
            None
        };

        match (literal, regex) {
            (Some((find, replace)), Some(regex)) => Ok(RewriteRule::Both {
                find,
                replace,
                regex,
            }),
            (Some((find, replace)), None) => Ok(RewriteRule::Literal { find, replace }),
            (None, Some(regex)) => Ok(RewriteRule::Regex(regex)),
            (None, None) => Err(config_error(&format!("Invalid replace settings {settings}"))),
        }
    }

    /// Rewrites a name
    ///
    /// With both a literal and a regex part, the literal replacement runs
    /// first and the regex sees its output.
    ///
    /// # Errors
    /// Returns a substitution error if the regex replacement references a
    /// missing group
    pub fn rewrite(&self, name: &str) -> Result<String> {
        match self {
            RewriteRule::Literal { find, replace } => Ok(name.replace(find.as_str(), replace)),
            RewriteRule::Regex(regex) => regex.apply(name),
            RewriteRule::Both {
                find,
                replace,
                regex,
            } => regex.apply(&name.replace(find.as_str(), replace)),
        }
    }
}

fn string_setting(settings: &RewriteSettings, key: &str) -> Result<String> {
    match settings.get(key) {
        Some(Value::String(value)) => Ok(value.clone()),
        Some(other) => Err(config_error(&format!(
            "Replace setting '{key}' must be a string, got {}",
            describe_value(other)
        ))),
        None => Err(config_error(&format!("Replace setting '{key}' is missing"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn rule(pairs: &[(&str, &str)]) -> Result<RewriteRule> {
        let settings: RewriteSettings = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), Value::from(*value)))
            .collect();
        RewriteRule::from_settings(&settings)
    }

    #[test]
    fn test_accepted_shapes() {
        assert!(matches!(
            rule(&[("find", "foo"), ("replace", "bar")]).unwrap(),
            RewriteRule::Literal { .. }
        ));
        assert!(matches!(
            rule(&[("regex_find", "x"), ("regex_replace", "")]).unwrap(),
            RewriteRule::Regex(_)
        ));
        assert!(matches!(
            rule(&[
                ("find", "foo"),
                ("replace", "bar"),
                ("regex_find", "x"),
                ("regex_replace", "")
            ])
            .unwrap(),
            RewriteRule::Both { .. }
        ));
    }

    #[test]
    fn test_rejected_shapes() {
        let shapes: &[&[(&str, &str)]] = &[
            &[],
            &[("find", "a"), ("repl", "b")],
            &[("find", "a")],
            &[("replace", "a")],
            &[("regex_find", "a")],
            &[("find", "a"), ("regex_replace", "b")],
            &[("find", "a"), ("replace", "b"), ("regex_find", "c")],
            &[("find", "a"), ("replace", "b"), ("extra", "c")],
        ];

        for shape in shapes {
            let result = rule(shape);
            assert!(
                matches!(result, Err(Error::Config { .. })),
                "Settings {shape:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejection_names_offending_settings() {
        let message = rule(&[("find", "a"), ("repl", "b")])
            .unwrap_err()
            .to_string();
        assert!(message.contains("repl: \"b\""), "got: {message}");
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let settings = RewriteSettings::new().with("find", "a").with("replace", 1);
        let error = RewriteRule::from_settings(&settings).unwrap_err();

        assert!(error.is_config_error());
        assert!(error.to_string().contains("'replace' must be a string"));
    }

    #[test]
    fn test_invalid_pattern_is_rejected_eagerly() {
        let error = rule(&[("regex_find", "^.(a"), ("regex_replace", "b")]).unwrap_err();
        assert!(error.is_config_error());
        assert!(error.to_string().contains("^.(a"));
    }

    #[test]
    fn test_literal_replaces_every_occurrence() {
        let rule = rule(&[("find", "o"), ("replace", "0")]).unwrap();
        assert_eq!(rule.rewrite("foo.yml").unwrap(), "f00.yml");
        assert_eq!(rule.rewrite("bar").unwrap(), "bar");
    }

    #[test]
    fn test_regex_replaces_every_match() {
        let rule = rule(&[("regex_find", "[0-9]+"), ("regex_replace", "#")]).unwrap();
        assert_eq!(rule.rewrite("a1b22c").unwrap(), "a#b#c");
        assert_eq!(rule.rewrite("abc").unwrap(), "abc");
    }

    #[test]
    fn test_empty_matches_follow_regex_crate() {
        // No empty match directly after a non-empty one
        let rule = rule(&[("regex_find", "a*"), ("regex_replace", "-")]).unwrap();
        assert_eq!(rule.rewrite("baaab").unwrap(), "-b-b-");
        assert_eq!(rule.rewrite("").unwrap(), "-");
    }

    #[test]
    fn test_missing_group_fails_even_without_match() {
        let rule = rule(&[("regex_find", "(a)"), ("regex_replace", r"\2")]).unwrap();
        assert!(matches!(rule.rewrite("a"), Err(Error::Substitution { .. })));
        assert!(matches!(rule.rewrite("zzz"), Err(Error::Substitution { .. })));
    }
}
