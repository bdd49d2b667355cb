//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{OperationType, PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{plan_renames, process_files, ProcessingOptions};
