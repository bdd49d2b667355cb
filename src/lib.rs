//! Output file name rewriting
//!
//! The [`rewrite`] module is the engine: it turns literal and regex
//! replacement settings into a single rewrite function and applies rewrite
//! functions to names after checking their arity. The remaining modules
//! form the `nrewrite` tool, which renames the files of a directory with
//! such a function.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod path_gen;
pub mod rewrite;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::errors::{
        arity_error, config_error, file_operation_error, generic_error, glob_pattern_error,
        invalid_filename_error, invalid_pattern_error, name_collision_error, path_operation_error,
        substitution_error,
    };
    pub use crate::errors::{Error, Result};
    pub use crate::logging::{format_message, init_logger, LogLevel};
    pub use crate::rewrite::{
        apply_name_rewrite, build_rewrite_function, generate_replace_func, Callable,
        RewriteRule, RewriteSettings, Setting, SettingsBag, Signature,
    };
    pub use crate::workflow::{process_files, ProcessingOptions, WorkflowContext};
}
