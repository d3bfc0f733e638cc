//! Borrowed record tables
//!
//! A [`Table`] is an ordered selection of records owned by a
//! [`RecordStore`](crate::RecordStore). Row order is meaningful: first/last
//! occurrence rules and ranking tie-breaks all follow it.

use crate::model::VideoRecord;

/// Ordered, read-only view over stored records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table<'a> {
    rows: Vec<&'a VideoRecord>,
}

impl<'a> Table<'a> {
    /// Table over every record in order
    pub fn from_records(records: &'a [VideoRecord]) -> Self {
        Self {
            rows: records.iter().collect(),
        }
    }

    /// Empty table
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Rows in order
    pub fn rows(&self) -> &[&'a VideoRecord] {
        &self.rows
    }

    /// Iterate rows in order
    pub fn iter(&self) -> impl Iterator<Item = &'a VideoRecord> + '_ {
        self.rows.iter().copied()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Keep rows matching a predicate, preserving order
    pub fn filter(&self, mut predicate: impl FnMut(&VideoRecord) -> bool) -> Self {
        self.iter().filter(|r| predicate(r)).collect()
    }
}

impl<'a> FromIterator<&'a VideoRecord> for Table<'a> {
    fn from_iter<I: IntoIterator<Item = &'a VideoRecord>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for Table<'a> {
    type Item = &'a VideoRecord;
    type IntoIter = std::vec::IntoIter<&'a VideoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}
