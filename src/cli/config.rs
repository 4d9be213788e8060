//! Configuration management for cropdoc
//!
//! TOML configuration with defaults and validation. Only logging is
//! configurable; nothing here can change the diagnosis printed on stdout.
//! Location: `$CROPDOC_CONFIG`, else `~/.cropdoc/config.toml`

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::errors::{PredictError, Result};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "CROPDOC_CONFIG";

/// Complete configuration for cropdoc
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Diagnostic logging on stderr
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `"warn"` or `"cropdoc=debug"`
    pub filter: String,
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
            ansi: false,
        }
    }
}

impl Config {
    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PredictError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| PredictError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `$CROPDOC_CONFIG` or the standard location, else built-in defaults
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(config_path) if config_path.exists() => Self::load_from_file(&config_path),
            _ => Ok(Config::default()),
        }
    }

    /// Where [`Config::load_default`] looks
    pub fn default_path() -> Option<PathBuf> {
        if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(explicit));
        }
        dirs::home_dir().map(|home| home.join(".cropdoc").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(PredictError::Config(
                "logging.filter must not be empty".to_string(),
            ));
        }

        EnvFilter::try_new(&self.logging.filter).map_err(|e| {
            PredictError::Config(format!(
                "Invalid logging filter '{}': {}",
                self.logging.filter, e
            ))
        })?;

        Ok(())
    }
}
