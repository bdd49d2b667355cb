//! Name rewriting engine
//!
//! This module contains the rewrite callables, the validated rewrite rules
//! and the builder that turns replacement settings into a rewrite function.

pub mod builder;
pub mod callable;
pub mod rule;
pub mod settings;
pub mod template;

pub use builder::{build_rewrite_function, generate_replace_func};
pub use callable::{apply_name_rewrite, Callable, Signature};
pub use rule::{RegexRewrite, RewriteRule};
pub use settings::{RewriteSettings, Setting, SettingsBag};
pub use template::{GroupRef, ReplacementTemplate};
