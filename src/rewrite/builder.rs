//! Replacement function builder
//!
//! Turns replacement settings into a single rewrite function and registers
//! it in a caller's settings bag.

use log::debug;

use crate::errors::Result;

use super::callable::Callable;
use super::rule::RewriteRule;
use super::settings::{RewriteSettings, Setting, SettingsBag};

/// Builds a rewrite function from replacement settings
///
/// The settings are validated and any regex is compiled before this
/// returns; the function itself only performs the substitution.
///
/// # Errors
/// Returns a configuration error if the settings are malformed
pub fn build_rewrite_function(settings: &RewriteSettings) -> Result<Callable> {
    let rule = RewriteRule::from_settings(settings)?;
    Ok(Callable::unary(move |name| rule.rewrite(name)))
}

/// Builds a rewrite function and stores it in `settings_bag` under `key`
///
/// Without settings the bag is left untouched, which downstream code reads
/// as "no rewriting". On error the bag is not modified either.
///
/// # Arguments
/// * `settings_bag` - The bag to register the function in
/// * `replace_settings` - The replacement settings, if any
/// * `key` - The key to store the function under
///
/// # Errors
/// Returns a configuration error if the settings have an unexpected key
/// set, a non-string value, or a pattern that does not compile
///
/// # Examples
/// ```
/// use name_rewrite::rewrite::{apply_name_rewrite, generate_replace_func, RewriteSettings, SettingsBag};
///
/// let mut bag = SettingsBag::new();
/// let settings = RewriteSettings::from([("regex_find", ".j(inja)?2$"), ("regex_replace", "")]);
/// generate_replace_func(&mut bag, Some(&settings), "name_repl_func").unwrap();
///
/// let name = apply_name_rewrite("foo.yml.j2", bag.rewrite_function("name_repl_func")).unwrap();
/// assert_eq!(name, "foo.yml");
/// ```
pub fn generate_replace_func(
    settings_bag: &mut SettingsBag,
    replace_settings: Option<&RewriteSettings>,
    key: &str,
) -> Result<()> {
    let Some(settings) = replace_settings else {
        return Ok(());
    };

    let callable = build_rewrite_function(settings)?;
    settings_bag.insert(key, Setting::Rewrite(callable));
    debug!("Registered name rewrite function {settings} under '{key}'");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::apply_name_rewrite;

    const KEY: &str = "name_repl_func";

    #[test]
    fn test_replaces_existing_function() {
        let mut bag = SettingsBag::new();
        let first = RewriteSettings::from([("find", "a"), ("replace", "b")]);
        let second = RewriteSettings::from([("find", "a"), ("replace", "c")]);

        generate_replace_func(&mut bag, Some(&first), KEY).unwrap();
        generate_replace_func(&mut bag, Some(&second), KEY).unwrap();

        assert_eq!(bag.len(), 1);
        assert_eq!(apply_name_rewrite("a", bag.rewrite_function(KEY)).unwrap(), "c");
    }

    #[test]
    fn test_failed_build_keeps_previous_function() {
        let mut bag = SettingsBag::new();
        let good = RewriteSettings::from([("find", "a"), ("replace", "b")]);
        let bad = RewriteSettings::from([("regex_find", "(")]);

        generate_replace_func(&mut bag, Some(&good), KEY).unwrap();
        assert!(generate_replace_func(&mut bag, Some(&bad), KEY).is_err());

        assert_eq!(apply_name_rewrite("a", bag.rewrite_function(KEY)).unwrap(), "b");
    }

    #[test]
    fn test_plain_value_is_not_a_rewrite_function() {
        let mut bag = SettingsBag::new();
        bag.insert_value(KEY, "not callable");

        assert!(bag.rewrite_function(KEY).is_none());
        assert_eq!(apply_name_rewrite("a", bag.rewrite_function(KEY)).unwrap(), "a");
    }
}
