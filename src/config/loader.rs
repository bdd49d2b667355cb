//! Configuration loading functionality
//!
//! This module contains functions for loading and validating configuration.

use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use log::debug;
use serde_yaml::from_str;

use crate::utils::{find_project_folder, process_path};

use super::model::Config;

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: PathBuf) -> Result<Config> {
    let config = parse_config(&file)?;
    config.validate(true)?;
    Ok(config)
}

/// Loads a configuration from a file without checking path existence
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config_unchecked(file: PathBuf) -> Result<Config> {
    let config = parse_config(&file)?;
    config.validate(false)?;
    Ok(config)
}

fn parse_config(file: &PathBuf) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    let config: Config = from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })?;

    debug!("Loaded configuration from {}", file.display());

    Ok(config)
}

/// Resolves the configuration file path
///
/// An existing path is used as is; otherwise the file name is looked up in
/// the platform configuration directory.
///
/// # Errors
/// Returns an error if the configuration directory cannot be created
pub fn read_or_create(config: PathBuf) -> Result<PathBuf> {
    if config.exists() {
        Ok(config)
    } else {
        let folder = find_project_folder()?;
        Ok(folder.config_dir().join(config))
    }
}

/// Deserializes a path given either as a string or as an array of components
///
/// Each component has `~` and environment variables expanded.
pub fn deserialize_from_array_to_pathbuf<'de, D>(
    deserializer: D,
) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PathBufVisitor;

    impl<'de> serde::de::Visitor<'de> for PathBufVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a path string or an array of strings")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(PathBuf::from(process_path(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(process_path(segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathBufVisitor)
}
