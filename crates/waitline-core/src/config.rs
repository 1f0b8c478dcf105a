//! Configuration loading and typed config structures for the Waitline
//! backend.
//!
//! The canonical configuration lives in `waitline.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads and validates the file.
//! Every field has a default, so a missing or empty file yields a working
//! development setup.

use std::path::Path;

use serde::Deserialize;

use waitline_types::ServiceMetrics;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level backend configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WaitlineConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Waiting-line defaults.
    #[serde(default)]
    pub queue: QueueConfig,
}

impl WaitlineConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for the listener:
    /// - `WAITLINE_HOST` overrides `server.host`
    /// - `WAITLINE_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.server.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.server.apply_env_overrides();
        Ok(config)
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to (e.g. `0.0.0.0`).
    #[serde(default = "default_host")]
    pub host: String,

    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Override listener settings with environment variables when set.
    ///
    /// This lets Docker Compose (or any deployment) move the listener
    /// without modifying the YAML config file. A `WAITLINE_PORT` that is
    /// not a valid port number is ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("WAITLINE_HOST") {
            self.host = val;
        }
        if let Ok(val) = std::env::var("WAITLINE_PORT")
            && let Ok(port) = val.parse::<u16>()
        {
            self.port = port;
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). Overridden by
    /// `RUST_LOG` when that is set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Waiting-line defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QueueConfig {
    /// Assumed minutes an average party occupies a table, for restaurants
    /// the seed data carries no metrics for.
    #[serde(default = "default_avg_dining_minutes")]
    pub default_avg_dining_minutes: u32,

    /// Assumed table count for restaurants without metrics.
    #[serde(default = "default_table_count")]
    pub default_table_count: u32,
}

impl QueueConfig {
    /// The fallback metrics the queue runtime uses.
    pub const fn default_metrics(&self) -> ServiceMetrics {
        ServiceMetrics {
            avg_dining_minutes: self.default_avg_dining_minutes,
            table_count: self.default_table_count,
        }
    }
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            default_avg_dining_minutes: default_avg_dining_minutes(),
            default_table_count: default_table_count(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_owned()
}

const fn default_avg_dining_minutes() -> u32 {
    15
}

const fn default_table_count() -> u32 {
    4
}
