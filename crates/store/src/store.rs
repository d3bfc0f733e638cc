//! Record store
//!
//! Loads the dataset once and hands out read-only [`Table`] views. Nothing
//! in the store changes after construction.

use crate::domain::DateDomain;
use crate::error::{Result, StoreError};
use crate::model::VideoRecord;
use crate::source::RecordSource;
use crate::table::Table;

/// Immutable in-memory dataset
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<VideoRecord>,
    domain: DateDomain,
}

impl RecordStore {
    /// Load every record from a source
    ///
    /// # Errors
    ///
    /// Returns `DataUnavailable` if the source cannot be read, is malformed,
    /// or holds no records.
    pub fn load(source: &dyn RecordSource) -> Result<Self> {
        let records = source.read()?;

        if records.is_empty() {
            return Err(StoreError::unavailable(
                source.describe(),
                "dataset contains no records",
            ));
        }

        let store = Self::from_records(records);

        tracing::info!(
            source = %source.describe(),
            rows = store.len(),
            dates = store.domain.len(),
            first = ?store.domain.first(),
            last = ?store.domain.last(),
            "loaded trending dataset"
        );

        Ok(store)
    }

    /// Build a store from already materialized records
    pub fn from_records(records: Vec<VideoRecord>) -> Self {
        let domain = DateDomain::new(records.iter().map(|r| r.trending_date).collect());
        Self { records, domain }
    }

    /// Full table in original row order
    pub fn table(&self) -> Table<'_> {
        Table::from_records(&self.records)
    }

    /// Distinct trending dates, ascending
    pub fn date_domain(&self) -> &DateDomain {
        &self.domain
    }

    /// Raw records
    pub fn records(&self) -> &[VideoRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
