//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::calculate::Benchmarks;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_cors_origin")]
    pub cors_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_cors_origin() -> String {
    "*".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origin: default_cors_origin(),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub benchmarks: Benchmarks,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            server: ServerConfig::default(),
            benchmarks: Benchmarks::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    /// `PORT` from the environment overrides the configured port.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };

        config.apply_port_override(std::env::var("PORT").ok().as_deref())?;
        Ok(config)
    }

    /// Replace the server port with `value` when it is set and non-empty.
    pub fn apply_port_override(&mut self, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            return Ok(());
        };

        self.server.port = raw
            .parse()
            .map_err(|_| ConfigError::ValidationError(format!("Invalid PORT value: {}", raw)))?;
        self.validate()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "Server port must be greater than 0".to_string(),
            ));
        }

        for (name, value) in self.benchmarks.entries() {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "Benchmark {} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if self.benchmarks.win_rate_floor > self.benchmarks.win_rate {
            return Err(ConfigError::ValidationError(
                "Benchmark win_rate_floor must not exceed win_rate".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, "info");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8082);
        assert_eq!(config.server.cors_origin, "*");
        assert_eq!(config.benchmarks, Benchmarks::default());
    }

    #[test]
    fn test_config_validation_ok() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_bad_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_benchmark() {
        let mut config = AppConfig::default();
        config.benchmarks.kda = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.benchmarks.deaths = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_floor_above_win_rate() {
        let mut config = AppConfig::default();
        config.benchmarks.win_rate_floor = 55.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_port_override() {
        let mut config = AppConfig::default();

        config.apply_port_override(None).unwrap();
        assert_eq!(config.server.port, 8082);

        config.apply_port_override(Some("")).unwrap();
        assert_eq!(config.server.port, 8082);

        config.apply_port_override(Some("9000")).unwrap();
        assert_eq!(config.server.port, 9000);

        assert!(config.apply_port_override(Some("not-a-port")).is_err());
        assert!(config.apply_port_override(Some("0")).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
log_level = "debug"

[server]
port = 9090

[benchmarks]
cs_per_minute = 7.0
vision_score = 55.0
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.benchmarks.cs_per_minute, 7.0);
        assert_eq!(config.benchmarks.vision_score, 55.0);
        assert_eq!(config.benchmarks.kda, 3.0);
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::from_file(&dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::ReadError(_))));
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();

        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config.server.port, parsed.server.port);
        assert_eq!(config.benchmarks, parsed.benchmarks);
    }
}
