//! Path generation module
//!
//! This module contains components for generating output names and destination paths.

mod naming;

pub use naming::{destination_path, output_name};
