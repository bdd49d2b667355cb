use glob::PatternError;
use regex::Error as RegexError;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Custom error type for the name rewriting engine
#[derive(Debug)]
pub enum Error {
    /// A rewriting callable does not take exactly one positional argument
    Arity { required: usize, optional: usize },
    /// Error related to rewrite configuration (key set, values, patterns, templates)
    Config {
        detail: String,
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    /// Error raised while applying a rewrite to a name
    Substitution { pattern: String, detail: String },
    /// Error related to file operations
    FileOperation {
        source: io::Error,
        path: PathBuf,
        operation: String,
    },
    /// Error related to glob pattern matching
    GlobPattern {
        source: PatternError,
        pattern: String,
    },
    /// Error related to path operations
    PathOperation { path: PathBuf, operation: String },
    /// Two source files would be written to the same target
    NameCollision {
        target: PathBuf,
        first: PathBuf,
        second: PathBuf,
    },
    /// Error when a filename is not valid Unicode
    InvalidFilename { path: PathBuf },
    /// Generic error with a message
    Generic { message: String },
}

impl Error {
    /// Whether the error stems from invalid configuration rather than from execution
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config { .. } | Error::GlobPattern { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arity { required, optional } => {
                write!(
                    f,
                    "Rewrite function must take exactly one positional argument, \
                     but it declares {required} required and {optional} optional"
                )
            }
            Error::Config { detail, .. } => {
                write!(f, "Configuration error: {detail}")
            }
            Error::Substitution { pattern, detail } => {
                write!(f, "Failed to substitute with pattern '{pattern}': {detail}")
            }
            Error::FileOperation {
                path, operation, ..
            } => {
                write!(f, "Failed to {} file: {}", operation, path.display())
            }
            Error::GlobPattern { pattern, .. } => {
                write!(f, "Invalid glob pattern: {pattern}")
            }
            Error::PathOperation { path, operation } => {
                write!(f, "Failed to {} path: {}", operation, path.display())
            }
            Error::NameCollision {
                target,
                first,
                second,
            } => {
                write!(
                    f,
                    "Both {} and {} would be written to {}",
                    first.display(),
                    second.display(),
                    target.display()
                )
            }
            Error::InvalidFilename { path } => {
                write!(f, "Filename is not valid unicode: {}", path.display())
            }
            Error::Generic { message } => {
                write!(f, "{message}")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Config {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Error::FileOperation { source, .. } => Some(source),
            Error::GlobPattern { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::FileOperation {
            source: err,
            path: PathBuf::new(),
            operation: "perform operation on".to_string(),
        }
    }
}

impl From<PatternError> for Error {
    fn from(err: PatternError) -> Self {
        Error::GlobPattern {
            source: err,
            pattern: String::new(),
        }
    }
}

/// Custom Result type for the name rewriting engine
///
/// # Examples
/// ```
/// use name_rewrite::prelude::{Result, config_error};
///
/// fn example_function(valid: bool) -> Result<String> {
///     if valid {
///         Ok("success".to_string())
///     } else {
///         Err(config_error("Something is misconfigured"))
///     }
/// }
/// # assert!(example_function(false).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Helper function to create an arity error
pub fn arity_error(required: usize, optional: usize) -> Error {
    Error::Arity { required, optional }
}

/// Helper function to create a configuration error without an underlying cause
pub fn config_error(detail: &str) -> Error {
    Error::Config {
        detail: detail.to_string(),
        source: None,
    }
}

/// Helper function to create a configuration error for a pattern that failed to compile
pub fn invalid_pattern_error(err: RegexError, pattern: &str) -> Error {
    Error::Config {
        detail: format!("Invalid regex pattern '{pattern}'"),
        source: Some(Box::new(err)),
    }
}

/// Helper function to create a substitution error
pub fn substitution_error(pattern: &str, detail: &str) -> Error {
    Error::Substitution {
        pattern: pattern.to_string(),
        detail: detail.to_string(),
    }
}

/// Helper function to create a file operation error
pub fn file_operation_error(err: io::Error, path: PathBuf, operation: &str) -> Error {
    Error::FileOperation {
        source: err,
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a glob pattern error
pub fn glob_pattern_error(err: PatternError, pattern: &str) -> Error {
    Error::GlobPattern {
        source: err,
        pattern: pattern.to_string(),
    }
}

/// Helper function to create a path operation error
pub fn path_operation_error(path: PathBuf, operation: &str) -> Error {
    Error::PathOperation {
        path,
        operation: operation.to_string(),
    }
}

/// Helper function to create a name collision error
pub fn name_collision_error(target: PathBuf, first: PathBuf, second: PathBuf) -> Error {
    Error::NameCollision {
        target,
        first,
        second,
    }
}

/// Helper function to create an invalid filename error
pub fn invalid_filename_error(path: PathBuf) -> Error {
    Error::InvalidFilename { path }
}

/// Helper function to create a generic error
pub fn generic_error(message: &str) -> Error {
    Error::Generic {
        message: message.to_string(),
    }
}
