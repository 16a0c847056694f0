//! Structured logging with tracing
//!
//! Centralized logging configuration using the tracing ecosystem. The
//! engine itself only emits events (cache population, registration,
//! boot/reset); this module wires them to a subscriber.

use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use vessel_domain::{Error, Result};

pub use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;

/// Initialize logging with the provided configuration
///
/// The `VESSEL_LOG` environment variable overrides the configured level
/// filter when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    // Types differ between the branches so each initializes separately
    if config.json_format {
        let stdout = fmt::layer()
            .json()
            .with_target(true)
            .with_thread_ids(true);
        Registry::default().with(filter).with(stdout).init();
    } else {
        let stdout = fmt::layer().with_target(true).with_thread_ids(true);
        Registry::default().with(filter).with(stdout).init();
    }

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::configuration(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
