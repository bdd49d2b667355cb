use std::fs::create_dir_all;
use std::path::Path;

use directories::ProjectDirs;
use shellexpand::{full, tilde};

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{file_operation_error, generic_error, Result};

/// Expands `~` and environment variables in a path
///
/// Falls back to expanding only the tilde when a variable is undefined.
pub fn expand_path(path: &str) -> String {
    match full(path) {
        Ok(expanded) => expanded.to_string(),
        Err(_) => tilde(path).to_string(),
    }
}

/// Appends a separator to bare Windows drive letters such as `C:`
pub fn handle_colon_end(mut path: String) -> String {
    if path.ends_with(':') {
        path += "\\";
    };
    path
}

/// Expands a single path component from configuration
pub fn process_path<S: AsRef<str>>(path: S) -> String {
    handle_colon_end(expand_path(path.as_ref()))
}

pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}

#[cfg(unix)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

#[cfg(windows)]
pub(crate) fn is_hidden_file(path: &Path) -> bool {
    use std::os::windows::fs::MetadataExt;

    if let Ok(metadata) = path.metadata() {
        metadata.file_attributes() & 0x2 != 0 // FILE_ATTRIBUTE_HIDDEN
    } else {
        false
    }
}
