//! Container layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vessel.toml";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VESSEL";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "VESSEL_LOG";

/// Default log level when none is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";
