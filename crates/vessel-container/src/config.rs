//! Container configuration
//!
//! Handles loading configuration from default values, an optional TOML
//! file, and environment variables, merged in that order with Figment.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use vessel_domain::{Error, Result};

use crate::constants::{CONFIG_ENV_PREFIX, DEFAULT_CONFIG_FILENAME, DEFAULT_LOG_LEVEL};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter: trace, debug, info, warn, or error
    pub level: String,
    /// Emit JSON-formatted events instead of plain text
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
        }
    }
}

/// Resolution engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Memoize candidate sets; disabling recomputes every resolution
    /// (behavior is otherwise identical)
    pub cache_enabled: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            cache_enabled: true,
        }
    }
}

/// Top-level container configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContainerConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Resolution engine configuration
    pub resolution: ResolutionConfig,
}

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources
    /// override earlier):
    /// 1. Default values from `ContainerConfig::default()`
    /// 2. TOML configuration file (if present)
    /// 3. Environment variables with prefix (e.g. `VESSEL_LOGGING_LEVEL`)
    pub fn load(&self) -> Result<ContainerConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(ContainerConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
            }
        } else {
            let default_path = Path::new(DEFAULT_CONFIG_FILENAME);
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
            }
        }

        // Underscore-separated nested keys, e.g. VESSEL_LOGGING_LEVEL
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        figment.extract().map_err(|e| Error::Configuration {
            message: "failed to load container configuration".to_string(),
            source: Some(Box::new(e)),
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
