//! Record sources
//!
//! A [`RecordSource`] produces the full dataset exactly once, at startup.
//! [`JsonFileSource`] reads a JSON array (`.json`) or JSON Lines
//! (`.jsonl`, `.ndjson`) file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};
use crate::model::VideoRecord;

/// Something that can produce the complete record set
pub trait RecordSource {
    /// Read every record
    fn read(&self) -> Result<Vec<VideoRecord>>;

    /// Human-readable source description for logs and errors
    fn describe(&self) -> String;
}

/// On-disk JSON layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonLayout {
    /// A single JSON array of records
    Array,
    /// One JSON record per line
    Lines,
}

impl JsonLayout {
    /// Pick the layout from a file extension (defaults to lines)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Array,
            _ => Self::Lines,
        }
    }
}

/// JSON or JSON Lines file source
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    layout: JsonLayout,
}

impl JsonFileSource {
    /// Create a source, inferring the layout from the extension
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let layout = JsonLayout::from_path(&path);
        Self { path, layout }
    }

    /// Force a specific layout
    pub fn with_layout(mut self, layout: JsonLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, reason: impl Into<String>) -> StoreError {
        StoreError::unavailable(self.describe(), reason)
    }

    fn parse_lines(&self, contents: &str) -> Result<Vec<VideoRecord>> {
        let mut records = Vec::new();
        for (i, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let record = serde_json::from_str(line)
                .map_err(|e| self.unavailable(format!("line {}: {}", i + 1, e)))?;
            records.push(record);
        }
        Ok(records)
    }
}

impl RecordSource for JsonFileSource {
    fn read(&self) -> Result<Vec<VideoRecord>> {
        let contents = fs::read_to_string(&self.path).map_err(|e| self.unavailable(e.to_string()))?;

        match self.layout {
            JsonLayout::Array => {
                serde_json::from_str(&contents).map_err(|e| self.unavailable(e.to_string()))
            }
            JsonLayout::Lines => self.parse_lines(&contents),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-memory source, mostly for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<VideoRecord>,
}

impl MemorySource {
    /// Wrap already materialized records
    pub fn new(records: Vec<VideoRecord>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn read(&self) -> Result<Vec<VideoRecord>> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
