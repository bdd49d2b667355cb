//! File operation functionality
//!
//! This module contains the function that moves or copies a file to its
//! rewritten name.

use std::fs::create_dir_all;

use fs_extra::file::{copy, move_file, CopyOptions};
use log::debug;

use crate::errors::{file_operation_error, Result};
use crate::workflow::{OperationType, PlannedOperation};

/// Performs a planned move or copy
///
/// Existing files at the destination are never overwritten.
///
/// # Arguments
/// * `operation` - The operation to perform
/// * `run_execution` - Whether to actually perform the file operation (true) or just simulate it (false)
///
/// # Errors
/// * Returns an error if the destination directory cannot be created
/// * Returns an error if the file cannot be moved or copied, including when the destination exists
pub fn perform_file_action(operation: &PlannedOperation, run_execution: bool) -> Result<()> {
    let source = &operation.source;
    let destination = &operation.destination;

    if !run_execution {
        debug!(
            "Simulating {}: {} -> {}",
            operation.operation_type,
            source.display(),
            destination.display()
        );
        return Ok(());
    }

    if let Some(parent) = destination.parent() {
        create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }

    let options = CopyOptions::new();
    debug!(
        "{}: {} -> {}",
        operation.operation_type,
        source.display(),
        destination.display()
    );

    match operation.operation_type {
        OperationType::Copy => {
            copy(source, destination, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source.clone(), "copy")
            })?;
        }
        OperationType::Move => {
            move_file(source, destination, &options).map_err(|e| {
                file_operation_error(std::io::Error::other(e), source.clone(), "move")
            })?;
        }
    }

    Ok(())
}
