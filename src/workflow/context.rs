//! Workflow context
//!
//! This module defines the context passed between workflow steps.

use std::fmt;
use std::path::PathBuf;

/// A rename that is about to happen, or would happen in a dry run
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOperation {
    /// The source path of the file
    pub source: PathBuf,
    /// The destination path of the file
    pub destination: PathBuf,
    /// Whether the file is moved or copied
    pub operation_type: OperationType,
}

/// Type of file operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Copy operation
    Copy,
    /// Move operation
    Move,
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationType::Copy => write!(f, "copy"),
            OperationType::Move => write!(f, "move"),
        }
    }
}

/// Statistics about the workflow
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowStats {
    /// Number of files found in the directory
    pub files_scanned: usize,
    /// Number of files whose name the rewrite left unchanged
    pub files_unchanged: usize,
    /// Number of files moved to their new name
    pub files_renamed: usize,
    /// Number of files copied to their new name
    pub files_copied: usize,
    /// Number of failed file operations
    pub errors: usize,
}

/// Context for the workflow
///
/// Holds the statistics and, in dry-run mode, the operations that would
/// have been performed.
#[derive(Debug, Clone, Default)]
pub struct WorkflowContext {
    /// Whether file operations are only simulated
    pub dry_run: bool,
    /// Statistics about the processing
    pub stats: WorkflowStats,
    /// Planned operations for dry-run mode
    pub planned_operations: Vec<PlannedOperation>,
}

impl WorkflowContext {
    /// Creates a new workflow context
    pub fn new(dry_run: bool) -> Self {
        WorkflowContext {
            dry_run,
            ..Default::default()
        }
    }

    /// Adds a planned operation to the context
    pub fn add_planned_operation(&mut self, operation: PlannedOperation) {
        self.planned_operations.push(operation);
    }

    /// Records a completed operation
    pub fn record_completed(&mut self, operation_type: OperationType) {
        match operation_type {
            OperationType::Copy => self.stats.files_copied += 1,
            OperationType::Move => self.stats.files_renamed += 1,
        }
    }

    /// Increments the number of errors
    pub fn increment_errors(&mut self) {
        self.stats.errors += 1;
    }
}
