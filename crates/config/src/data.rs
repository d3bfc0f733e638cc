//! Dataset location

use std::path::PathBuf;

use serde::Deserialize;

/// Default dataset path, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "data/final.jsonl";

/// Dataset configuration
///
/// `.json` files are read as one JSON array, anything else as JSON Lines.
///
/// # Example
///
/// ```toml
/// [data]
/// path = "data/final.jsonl"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the trending dataset
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}
