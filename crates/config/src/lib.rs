//! Trendboard Configuration
//!
//! TOML-based configuration loading with sensible defaults.
//! Minimal config should just work - only specify what you need to change.
//!
//! # Parsing
//!
//! Use the `FromStr` trait to parse configuration:
//!
//! ```
//! use trendboard_config::Config;
//! use std::str::FromStr;
//!
//! let config = Config::from_str("[data]\npath = \"trending.jsonl\"").unwrap();
//! assert_eq!(config.dashboard.top_k, 10);
//! ```
//!
//! # Example Minimal Config
//!
//! ```toml
//! [data]
//! path = "data/final.jsonl"
//!
//! [dashboard]
//! top_k = 5
//! ```

mod dashboard;
mod data;
mod error;
mod labels;
mod logging;
mod validation;

use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use dashboard::{DashboardConfig, ViewGainConfig};
pub use data::{DEFAULT_DATA_PATH, DataConfig};
pub use error::{ConfigError, Result};
pub use labels::LabelsConfig;
pub use logging::{LogConfig, LogFormat, LogLevel, LogOutput};

use serde::Deserialize;

/// Main configuration structure
///
/// All sections are optional with sensible defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub log: LogConfig,

    /// Dataset location
    pub data: DataConfig,

    /// Chart sizes and view-gain trim
    pub dashboard: DashboardConfig,

    /// Chart label shortening
    pub labels: LabelsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_str(&contents)
    }

    /// Parse configuration from a TOML string
    ///
    /// Prefer using the `FromStr` trait implementation.
    fn parse(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        validation::validate_config(self)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
