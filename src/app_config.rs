use anyhow::{Context, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

use crate::errors::AppError;
use crate::validation::ValidationConfig;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and resolving the listening address.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// HTTP server config
    #[serde(default)]
    pub server: ServerConfig,

    /// Validation thresholds
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP server configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    // @field: Interface to bind
    #[serde(default = "default_host")]
    pub host: String,

    // @field: TCP port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Parse a port value as it appears in the environment
pub fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid port '{}': {}", raw, e)).into())
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let file = File::open(path)
            .context(format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .map_err(AppError::from)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config("Port must be non-zero".to_string()).into());
        }

        self.server.host.parse::<IpAddr>().map_err(|_| {
            AppError::Config(format!("Invalid host address: {}", self.server.host))
        })?;

        let min = self.validation.min_length_ratio;
        let max = self.validation.max_length_ratio;
        if !(min.is_finite() && max.is_finite()) || min < 0.0 || max <= 0.0 {
            return Err(AppError::Config(format!(
                "Length ratio bounds must be finite and positive (min {}, max {})",
                min, max
            ))
            .into());
        }
        if min > max {
            return Err(AppError::Config(format!(
                "Minimum length ratio {} exceeds maximum {}",
                min, max
            ))
            .into());
        }

        Ok(())
    }

    /// Socket address the server binds to
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.server.host.parse().map_err(|_| {
            AppError::Config(format!("Invalid host address: {}", self.server.host))
        })?;
        Ok(SocketAddr::new(ip, self.server.port))
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig::default(),
            validation: ValidationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
