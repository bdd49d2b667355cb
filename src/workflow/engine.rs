//! Workflow engine
//!
//! This module contains the engine that orchestrates the workflow steps.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use log::{debug, error, info};
use rayon::prelude::*;

use crate::config::{load_config, read_or_create};
use crate::discovery::scan_directory;
use crate::errors::name_collision_error;
use crate::file_ops::perform_file_action;
use crate::logging::format_message;
use crate::path_gen::destination_path;
use crate::rewrite::SettingsBag;

use super::context::{OperationType, PlannedOperation, WorkflowContext};

/// Options for processing files
#[derive(Debug, Clone)]
pub struct ProcessingOptions {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to only simulate file operations
    pub dry_run: bool,
}

/// Plans the rename of every file
///
/// Destinations are computed in parallel with the rewrite function held
/// in `bag`. Files whose name does not change are left out of the plan.
/// The plan keeps the order of `files`.
///
/// # Arguments
/// * `files` - The files to rename
/// * `directory` - The directory rewritten names are relative to
/// * `bag` - Settings bag holding the rewrite function
/// * `copy` - Whether to copy instead of move
///
/// # Errors
/// * Returns the first error raised while rewriting a name
/// * Returns `Error::NameCollision` if two files would get the same destination,
///   or if a destination is the source of another planned rename
pub fn plan_renames(
    files: &[PathBuf],
    directory: &Path,
    bag: &SettingsBag,
    copy: bool,
) -> crate::errors::Result<Vec<PlannedOperation>> {
    let operation_type = if copy {
        OperationType::Copy
    } else {
        OperationType::Move
    };

    let destinations: Vec<Option<PathBuf>> = files
        .par_iter()
        .map(|source| destination_path(source, directory, bag))
        .collect::<crate::errors::Result<_>>()?;

    let mut plan = Vec::new();
    for (source, destination) in files.iter().zip(destinations) {
        let Some(destination) = destination else {
            continue;
        };
        plan.push(PlannedOperation {
            source: source.clone(),
            destination,
            operation_type,
        });
    }

    {
        let mut seen: HashMap<&Path, &Path> = HashMap::new();
        for operation in &plan {
            if let Some(first) = seen.insert(&operation.destination, &operation.source) {
                return Err(name_collision_error(
                    operation.destination.clone(),
                    first.to_path_buf(),
                    operation.source.clone(),
                ));
            }
        }

        // A destination may not be a file that is itself being renamed
        let sources: HashSet<&Path> = plan.iter().map(|op| op.source.as_path()).collect();
        for operation in &plan {
            if sources.contains(operation.destination.as_path()) {
                return Err(name_collision_error(
                    operation.destination.clone(),
                    operation.destination.clone(),
                    operation.source.clone(),
                ));
            }
        }
    }

    Ok(plan)
}

/// Processes files based on the configuration
///
/// This function orchestrates the workflow steps:
/// 1. Read the configuration and build the settings bag
/// 2. Scan the directory for files matching the include filter
/// 3. Plan the renames
/// 4. Move or copy each file, or record the plan in a dry run
///
/// # Errors
/// * Returns an error if the configuration cannot be loaded or built
/// * Returns an error if scanning or planning fails
///
/// Failed file operations are logged and counted instead.
pub fn process_files(options: ProcessingOptions) -> Result<WorkflowContext> {
    let config_file_path = read_or_create(options.config_path)?;
    let config = load_config(config_file_path)?;
    let bag = config.compile_settings()?;
    let include = config.include_pattern()?;

    let mut context = WorkflowContext::new(options.dry_run);

    let files = scan_directory(&config.directory, include.as_ref())?;
    context.stats.files_scanned = files.len();

    if files.is_empty() {
        info!("No files found in {}", config.directory.display());
        return Ok(context);
    }

    let plan = plan_renames(&files, &config.directory, &bag, config.copy)?;
    context.stats.files_unchanged = files.len() - plan.len();

    info!(
        "Renaming {} of {} files{}...",
        plan.len(),
        files.len(),
        if options.dry_run { " (dry run)" } else { "" }
    );

    for operation in plan {
        let target = operation
            .destination
            .strip_prefix(&config.directory)
            .unwrap_or(&operation.destination)
            .display()
            .to_string();
        let message = format!("{} -> {}", operation.source.display(), target);
        let colored_message = format!("{} -> {}", operation.source.display(), target.bold());

        if options.dry_run {
            perform_file_action(&operation, false)?;
            info!("{}", format_message(&message, &colored_message));
            context.add_planned_operation(operation);
            continue;
        }

        match perform_file_action(&operation, true) {
            Ok(()) => {
                info!("{}", format_message(&message, &colored_message));
                context.record_completed(operation.operation_type);
            }
            Err(e) => {
                error!("Failed to {} {}: {e}", operation.operation_type, operation.source.display());
                context.increment_errors();
            }
        }
    }

    debug!("Workflow finished: {:?}", context.stats);

    Ok(context)
}
