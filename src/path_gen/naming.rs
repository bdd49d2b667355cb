//! Output name generation
//!
//! This module turns a source file name into its output name using the
//! settings bag built from configuration.

use std::path::{Component, Path, PathBuf};

use serde_yaml::Value;

use crate::constants::{NAME_REWRITE_KEY, SUFFIX_REMOVE_KEY, SUFFIX_STRIPPED_KEY};
use crate::errors::{generic_error, invalid_filename_error, path_operation_error, Result};
use crate::rewrite::{apply_name_rewrite, SettingsBag};

/// Computes the output name for `name`
///
/// If suffix removal is enabled in the bag and the name ends with the
/// configured suffix, the suffix is stripped first. The result is then
/// passed through the bag's rewrite function, if there is one.
///
/// # Errors
/// Propagates errors from the rewrite function
pub fn output_name(bag: &SettingsBag, name: &str) -> Result<String> {
    let suffix_remove = matches!(bag.value(SUFFIX_REMOVE_KEY), Some(Value::Bool(true)));
    let suffix = bag.value(SUFFIX_STRIPPED_KEY).and_then(Value::as_str);

    let stripped = match suffix {
        Some(suffix) if suffix_remove && !suffix.is_empty() => {
            name.strip_suffix(suffix).unwrap_or(name)
        }
        _ => name,
    };

    apply_name_rewrite(stripped, bag.rewrite_function(NAME_REWRITE_KEY))
}

/// Computes the destination of a source file
///
/// Rewritten names may contain `/` to place the output in a subdirectory
/// of `directory`, but must stay inside it.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The destination, or `None` if the name is unchanged
///
/// # Errors
/// * Returns an error if the file name is missing or not valid unicode
/// * Returns an error if the rewritten name is empty
/// * Returns an error if the rewritten name is absolute or contains `..`
/// * Propagates errors from the rewrite function
pub fn destination_path(
    source: &Path,
    directory: &Path,
    bag: &SettingsBag,
) -> Result<Option<PathBuf>> {
    let name = source
        .file_name()
        .ok_or_else(|| path_operation_error(source.to_path_buf(), "get filename"))?
        .to_str()
        .ok_or_else(|| invalid_filename_error(source.to_path_buf()))?;

    let new_name = output_name(bag, name)?;
    if new_name == name {
        return Ok(None);
    }
    if new_name.is_empty() {
        return Err(generic_error(&format!(
            "Rewriting '{name}' produced an empty name"
        )));
    }

    let escapes = Path::new(&new_name).components().any(|component| {
        matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    });
    if escapes {
        return Err(generic_error(&format!(
            "Rewriting '{name}' produced '{new_name}', which leaves {}",
            directory.display()
        )));
    }

    Ok(Some(directory.join(new_name)))
}
