//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "injector.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "injector";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "INJECTOR";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "INJECTOR_LOG";

/// File name stem of rolling log files
pub const LOG_FILE_STEM: &str = "injector";
