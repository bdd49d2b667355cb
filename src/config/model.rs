//! Configuration data structures
//!
//! This module contains the data structures for configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use glob::Pattern;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_SUFFIX_STRIPPED, NAME_REWRITE_KEY, SUFFIX_REMOVE_KEY, SUFFIX_STRIPPED_KEY,
};
use crate::errors::glob_pattern_error;
use crate::rewrite::{generate_replace_func, RewriteRule, RewriteSettings, SettingsBag};

use super::loader::deserialize_from_array_to_pathbuf;

/// Configuration for the name rewriting tool
///
/// ```yaml
/// directory: ["~", "build", "compiled"]
/// include: "*.j2"
/// suffix_remove: true
/// replace:
///   find: "staging"
///   replace: "production"
/// ```
#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Directory whose files are renamed
    #[serde(deserialize_with = "deserialize_from_array_to_pathbuf")]
    pub directory: PathBuf,
    /// Glob pattern a file name must match to be processed
    #[serde(default)]
    pub include: Option<String>,
    /// Whether to copy files to their new name instead of moving them
    #[serde(default)]
    pub copy: bool,
    /// Whether to strip `suffix_stripped` before rewriting
    #[serde(default)]
    pub suffix_remove: bool,
    /// Suffix removed when `suffix_remove` is set
    #[serde(default = "default_suffix_stripped")]
    pub suffix_stripped: String,
    /// Replacement settings for the name rewrite function
    #[serde(default)]
    pub replace: Option<RewriteSettings>,
}

fn default_suffix_stripped() -> String {
    DEFAULT_SUFFIX_STRIPPED.to_string()
}

impl Config {
    /// Validates the configuration
    ///
    /// Replacement settings are checked by building them, so a bad pattern
    /// is reported here rather than on the first file.
    ///
    /// # Arguments
    /// * `check_paths` - Whether to check that the directory exists
    ///
    /// # Errors
    /// Returns an error with a detailed message if validation fails
    pub fn validate(&self, check_paths: bool) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(anyhow!(
                "No directory specified in configuration. A directory to process is required."
            ));
        }

        if check_paths {
            if !self.directory.exists() {
                return Err(anyhow!(
                    "Directory does not exist: {}\n{}",
                    self.directory.display(),
                    "Please check the path and ensure it exists."
                ));
            }

            if !self.directory.is_dir() {
                return Err(anyhow!(
                    "Path is not a directory: {}\n{}",
                    self.directory.display(),
                    "Please specify a valid directory path."
                ));
            }
        }

        self.include_pattern()?;

        if self.suffix_remove && self.suffix_stripped.is_empty() {
            return Err(anyhow!(
                "suffix_remove is enabled but suffix_stripped is empty. Please specify the suffix to remove."
            ));
        }

        if let Some(settings) = &self.replace {
            RewriteRule::from_settings(settings)
                .with_context(|| format!("Invalid replace settings in configuration: {settings}"))?;
        }

        Ok(())
    }

    /// Compiles the include filter, if any
    ///
    /// # Errors
    /// Returns an error if the glob pattern is malformed
    pub fn include_pattern(&self) -> crate::errors::Result<Option<Pattern>> {
        self.include
            .as_deref()
            .map(|include| Pattern::new(include).map_err(|e| glob_pattern_error(e, include)))
            .transpose()
    }

    /// Builds the settings bag handed to the rename workflow
    ///
    /// The bag holds the suffix settings as plain values and, when
    /// `replace` is configured, the rewrite function under
    /// [`NAME_REWRITE_KEY`].
    ///
    /// # Errors
    /// Returns a configuration error if the replacement settings are malformed
    pub fn compile_settings(&self) -> crate::errors::Result<SettingsBag> {
        let mut bag = SettingsBag::new();
        bag.insert_value(SUFFIX_REMOVE_KEY, self.suffix_remove);
        bag.insert_value(SUFFIX_STRIPPED_KEY, self.suffix_stripped.as_str());
        generate_replace_func(&mut bag, self.replace.as_ref(), NAME_REWRITE_KEY)?;
        Ok(bag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::apply_name_rewrite;

    fn config(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = config("directory: build\n");

        assert_eq!(config.directory, PathBuf::from("build"));
        assert!(config.include.is_none());
        assert!(!config.copy);
        assert!(!config.suffix_remove);
        assert_eq!(config.suffix_stripped, ".j2");
        assert!(config.replace.is_none());
        assert!(config.validate(false).is_ok());
    }

    #[test]
    fn test_directory_as_array() {
        let config = config("directory: [\"build\", \"compiled\"]\n");
        assert_eq!(config.directory, PathBuf::from("build").join("compiled"));
    }

    #[test]
    fn test_validate_rejects_bad_replace_settings() {
        let config = config("directory: build\nreplace:\n  find: a\n  repl: b\n");
        let error = config.validate(false).unwrap_err();
        assert!(format!("{error:#}").contains("repl"));
    }

    #[test]
    fn test_validate_rejects_bad_include() {
        let config = config("directory: build\ninclude: \"[\"\n");
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_validate_rejects_empty_suffix() {
        let config = config("directory: build\nsuffix_remove: true\nsuffix_stripped: \"\"\n");
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_validate_checks_paths() {
        let config = config("directory: /definitely/not/here/name_rewrite\n");
        assert!(config.validate(false).is_ok());
        assert!(config.validate(true).is_err());
    }

    #[test]
    fn test_compile_settings() {
        let config = config(
            "directory: build\nreplace:\n  regex_find: \"(.*)\\\\.jinja2\"\n  regex_replace: \"\\\\g<1>\"\n",
        );
        let bag = config.compile_settings().unwrap();

        assert_eq!(bag.len(), 3);
        let func = bag.rewrite_function(NAME_REWRITE_KEY);
        assert_eq!(apply_name_rewrite("foo.yml.jinja2", func).unwrap(), "foo.yml");
    }

    #[test]
    fn test_compile_settings_without_replace() {
        let bag = config("directory: build\n").compile_settings().unwrap();

        assert_eq!(bag.len(), 2);
        assert!(!bag.contains_key(NAME_REWRITE_KEY));
    }
}
