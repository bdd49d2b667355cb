//! Directory scanning functionality
//!
//! This module contains functions for scanning directories and finding files.

use std::fs::read_dir;
use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};

use crate::errors::{file_operation_error, Result};
use crate::utils::is_hidden_file;

/// Scans a directory for files
///
/// Hidden files and subdirectories are skipped. When `include` is given,
/// only files whose name matches it are returned. The result is sorted so
/// that renames are planned in a stable order.
///
/// # Arguments
/// * `directory` - The directory to scan
/// * `include` - Optional glob pattern matched against file names
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The files found or an error
///
/// # Errors
/// Returns an error if the directory cannot be read
pub fn scan_directory(directory: &Path, include: Option<&Pattern>) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_operation_error(e, directory.to_path_buf(), "read directory"))?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| !is_hidden_file(path))
        .filter(|path| path.is_file())
        .filter(|path| match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => include.is_none_or(|pattern| pattern.matches(name)),
            None => {
                warn!("Skipping file with non-unicode name: {}", path.display());
                false
            }
        })
        .collect();
    files.sort();

    debug!("Found {} files in directory", files.len());

    Ok(files)
}
