//! File operations module
//!
//! This module contains components for moving and copying renamed files.

mod actions;

pub use actions::perform_file_action;
