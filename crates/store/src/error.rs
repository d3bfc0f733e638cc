//! Store error types

use chrono::NaiveDate;
use thiserror::Error;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing source is missing, unreadable or malformed
    #[error("data unavailable from {source_name}: {reason}")]
    DataUnavailable {
        /// Source description (usually a file path)
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// Date-domain indices are inverted or out of bounds
    #[error("invalid range [{start}, {end}] for date domain of {len} dates")]
    InvalidRange {
        /// Requested start index
        start: usize,
        /// Requested end index
        end: usize,
        /// Number of dates in the domain
        len: usize,
    },

    /// Date is not part of the date domain
    #[error("date {0} is not in the date domain")]
    UnknownDate(NaiveDate),
}

impl StoreError {
    /// Create a DataUnavailable error
    pub fn unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DataUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
