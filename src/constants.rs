//! Constants used throughout the application
//!
//! This module centralises all constants used in the application to make
//! them easier to manage and update.

/// Settings key for the literal text to find
pub const FIND_KEY: &str = "find";

/// Settings key for the literal replacement text
pub const REPLACE_KEY: &str = "replace";

/// Settings key for the regex pattern to find
pub const REGEX_FIND_KEY: &str = "regex_find";

/// Settings key for the regex replacement template
pub const REGEX_REPLACE_KEY: &str = "regex_replace";

/// Settings bag key under which the name rewrite function is stored
pub const NAME_REWRITE_KEY: &str = "name_repl_func";

/// Settings bag key for the suffix removal flag
pub const SUFFIX_REMOVE_KEY: &str = "suffix_remove";

/// Settings bag key for the suffix that is removed
pub const SUFFIX_STRIPPED_KEY: &str = "suffix_stripped";

/// Suffix removed from names when suffix removal is enabled
pub const DEFAULT_SUFFIX_STRIPPED: &str = ".j2";

/// Qualifier string used for application identification
///
/// This is used as part of the application's unique identifier.
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
///
/// This is used as part of the application's unique identifier.
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for identification
///
/// This is the name of the application used in various contexts like
/// configuration file paths and application identification.
pub const APPLICATION: &str = "name_rewrite";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Run without renaming any files";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Write the log to this file";

/// Help text for the local logging command-line option
pub const LOCAL_LOGGING_HELP: &str = "Keep the log file in the current directory instead of the configuration directory";

/// Default name of the log file
pub const LOG_FILE_DEFAULT: &str = "name_rewrite.log";

/// Default path for the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";
