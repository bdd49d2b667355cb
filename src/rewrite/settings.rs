//! Rewrite settings and the settings bag
//!
//! `RewriteSettings` is the raw mapping read from configuration; it is only
//! checked when turned into a [`RewriteRule`](super::RewriteRule).
//! `SettingsBag` is the key-value mapping a caller threads through its
//! pipeline and into which the builder stores the rewrite function.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_yaml::Value;

use super::callable::Callable;

/// Raw replacement settings as found in configuration
///
/// Recognised keys are `find`, `replace`, `regex_find` and `regex_replace`.
/// Any other key is kept so that validation can report it.
///
/// ```yaml
/// replace:
///   regex_find: "(.*)\\.jinja2"
///   regex_replace: "\\g<1>"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct RewriteSettings(BTreeMap<String, Value>);

impl RewriteSettings {
    /// Creates empty settings
    pub fn new() -> Self {
        RewriteSettings::default()
    }

    /// Adds a setting, returning the settings for chaining
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Gets the raw value of a setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a setting is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterates over the keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no settings
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RewriteSettings {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(key, value)| (key.to_string(), Value::from(value)))
            .collect()
    }
}

impl FromIterator<(String, Value)> for RewriteSettings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        RewriteSettings(iter.into_iter().collect())
    }
}

impl fmt::Display for RewriteSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .0
            .iter()
            .map(|(key, value)| format!("{key}: {}", describe_value(value)))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

/// Renders a YAML value on a single line for error messages
pub(crate) fn describe_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("{s:?}"),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().replace('\n', " "))
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}

/// A single entry of a [`SettingsBag`]
#[derive(Debug, Clone)]
pub enum Setting {
    /// A plain configuration value
    Value(Value),
    /// A name rewrite function
    Rewrite(Callable),
}

/// Caller-owned key-value settings passed through a compile pipeline
#[derive(Debug, Clone, Default)]
pub struct SettingsBag {
    entries: HashMap<String, Setting>,
}

impl SettingsBag {
    /// Creates an empty bag
    pub fn new() -> Self {
        SettingsBag::default()
    }

    /// Inserts a setting, replacing any previous one under the same key
    pub fn insert(&mut self, key: &str, setting: Setting) -> Option<Setting> {
        self.entries.insert(key.to_string(), setting)
    }

    /// Inserts a plain configuration value
    pub fn insert_value(&mut self, key: &str, value: impl Into<Value>) -> Option<Setting> {
        self.insert(key, Setting::Value(value.into()))
    }

    /// Gets a setting
    pub fn get(&self, key: &str) -> Option<&Setting> {
        self.entries.get(key)
    }

    /// Gets a plain value, ignoring rewrite functions
    pub fn value(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key) {
            Some(Setting::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Gets a rewrite function, ignoring plain values
    pub fn rewrite_function(&self, key: &str) -> Option<&Callable> {
        match self.entries.get(key) {
            Some(Setting::Rewrite(callable)) => Some(callable),
            _ => None,
        }
    }

    /// Whether a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a setting
    pub fn remove(&mut self, key: &str) -> Option<Setting> {
        self.entries.remove(key)
    }

    /// Iterates over the keys in arbitrary order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
