//! Analytics error types

use thiserror::Error;

/// Analytics errors
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Country code has no ISO-3 mapping
    #[error("unknown country code: {0}")]
    UnknownCountryCode(String),

    /// Too few rows for the requested aggregate
    #[error("insufficient data: need at least {required} rows, got {actual}")]
    InsufficientData {
        /// Minimum rows required
        required: usize,
        /// Rows available
        actual: usize,
    },

    /// Store error (from trendboard-store)
    #[error("store error: {0}")]
    Store(#[from] trendboard_store::StoreError),
}

/// Result type for analytics operations
pub type Result<T> = std::result::Result<T, AnalyticsError>;
