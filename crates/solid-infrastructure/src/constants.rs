//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "solid.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "solid";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SOLID";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV: &str = "SOLID_LOG";
