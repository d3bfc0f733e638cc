//! Date domain
//!
//! The sorted set of distinct trending dates in the dataset. Range selectors
//! address dates by their index in this domain, not by calendar arithmetic.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{Result, StoreError};

/// Ascending, deduplicated trending dates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DateDomain {
    dates: Vec<NaiveDate>,
}

impl DateDomain {
    /// Build a domain from any dates (sorted and deduplicated here)
    pub fn new(mut dates: Vec<NaiveDate>) -> Self {
        dates.sort_unstable();
        dates.dedup();
        Self { dates }
    }

    /// All dates, ascending
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Date at an index
    pub fn get(&self, index: usize) -> Option<NaiveDate> {
        self.dates.get(index).copied()
    }

    /// Number of dates
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Earliest date
    pub fn first(&self) -> Option<NaiveDate> {
        self.dates.first().copied()
    }

    /// Latest date
    pub fn last(&self) -> Option<NaiveDate> {
        self.dates.last().copied()
    }

    /// Index of a date, failing if it is not in the domain
    pub fn index_of(&self, date: NaiveDate) -> Result<usize> {
        self.dates
            .binary_search(&date)
            .map_err(|_| StoreError::UnknownDate(date))
    }

    /// Resolve an inclusive index range to its boundary dates
    ///
    /// Fails when `start > end` or either index is out of bounds.
    pub fn bounds(&self, start: usize, end: usize) -> Result<(NaiveDate, NaiveDate)> {
        let invalid = || StoreError::InvalidRange {
            start,
            end,
            len: self.dates.len(),
        };

        if start > end {
            return Err(invalid());
        }

        match (self.get(start), self.get(end)) {
            (Some(first), Some(last)) => Ok((first, last)),
            _ => Err(invalid()),
        }
    }

    /// Short label for a range-slider mark, e.g. `Jul-08`
    pub fn label(&self, index: usize) -> Option<String> {
        self.get(index).map(|d| d.format("%b-%d").to_string())
    }

    /// Index range covering the whole domain, if any
    pub fn full_range(&self) -> Option<(usize, usize)> {
        if self.dates.is_empty() {
            None
        } else {
            Some((0, self.dates.len() - 1))
        }
    }
}
