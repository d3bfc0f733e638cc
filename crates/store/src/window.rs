//! Date window selection
//!
//! Daily views select one trending date; weekly views select an inclusive
//! range of date-domain indices.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::DateDomain;
use crate::error::Result;
use crate::table::Table;

/// A user selection over the date domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Window {
    /// A single trending date
    Day {
        /// Selected date
        date: NaiveDate,
    },
    /// Inclusive range of domain indices
    Range {
        /// First index
        start: usize,
        /// Last index (inclusive)
        end: usize,
    },
}

impl Window {
    /// Apply this window to a table
    pub fn select<'a>(&self, table: &Table<'a>, domain: &DateDomain) -> Result<Table<'a>> {
        match *self {
            Self::Day { date } => Ok(select_day(table, date)),
            Self::Range { start, end } => select_range(table, domain, start, end),
        }
    }
}

/// Rows whose trending date equals `date` (empty if none)
pub fn select_day<'a>(table: &Table<'a>, date: NaiveDate) -> Table<'a> {
    table.filter(|r| r.trending_date == date)
}

/// Rows whose trending date lies in `[domain[start], domain[end]]`
///
/// # Errors
///
/// Returns `InvalidRange` when `start > end` or an index is out of bounds.
pub fn select_range<'a>(
    table: &Table<'a>,
    domain: &DateDomain,
    start: usize,
    end: usize,
) -> Result<Table<'a>> {
    let (first, last) = domain.bounds(start, end)?;
    let selected = table.filter(|r| r.trending_date >= first && r.trending_date <= last);

    tracing::debug!(
        start = %first,
        end = %last,
        rows = selected.len(),
        "selected date range"
    );

    Ok(selected)
}
