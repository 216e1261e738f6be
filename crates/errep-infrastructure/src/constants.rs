//! Infrastructure constants
//!
//! Defaults for configuration loading and logging. Adapter-level defaults
//! live in errep-providers.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "errep.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "errep";

/// Environment variable prefix for configuration (`ERREP__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "ERREP";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_VAR: &str = "ERREP_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "errep";

// ============================================================================
// ADAPTER SELECTION CONSTANTS
// ============================================================================

/// Default repository adapter key
pub const DEFAULT_REPOSITORY_PROVIDER: &str = "in_memory";

/// Default event publisher adapter key
pub const DEFAULT_EVENT_PUBLISHER_PROVIDER: &str = "in_memory";

/// Default broadcast capacity for in-process publishers
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

// ============================================================================
// SUBMISSION CONSTANTS
// ============================================================================

/// Default backoff unit between publish retries (milliseconds)
pub const DEFAULT_PUBLISH_RETRY_BACKOFF_MS: u64 = 100;
