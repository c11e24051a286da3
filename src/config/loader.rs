use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::{Config, LookupSource};

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/pokeinfo/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pokeinfo").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The GraphQL endpoint is an http(s) URL when it is the active source
    /// - Timeout and tick rate are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lookup.source == LookupSource::Graphql {
            let endpoint = self.lookup.endpoint.trim();
            if endpoint.is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "lookup.endpoint must not be empty".to_string(),
                });
            }
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "lookup.endpoint '{}' must start with http:// or https://",
                        endpoint
                    ),
                });
            }
        }

        if self.lookup.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "lookup.timeout_seconds must be greater than 0".to_string(),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn offline_source_ignores_endpoint() {
        let mut config = Config::default();
        config.lookup.source = LookupSource::Offline;
        config.lookup.endpoint = String::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_tick_rate_is_rejected() {
        let mut config = Config::default();
        config.ui.tick_rate_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("tick_rate_ms"));
    }
}
