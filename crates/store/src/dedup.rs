//! Per-video deduplication
//!
//! The raw table has one row per video per trending day. Two canonical
//! projections collapse it to one row per `video_id`:
//!
//! - [`first_seen`]: the row with the earliest trending date, for attributes
//!   fixed at first appearance (publish time, category).
//! - [`last_seen`]: the row with the latest trending date, for cumulative
//!   counters (views, likes, comments).
//!
//! Both sort by trending date with a stable sort, so rows sharing a date keep
//! their original order: `first_seen` keeps the first of them, `last_seen`
//! the last. Output is in trending-date order.

use std::collections::{HashMap, HashSet};

use crate::model::VideoRecord;
use crate::table::Table;

/// One row per video: the earliest trending observation
pub fn first_seen<'a>(table: &Table<'a>) -> Table<'a> {
    let sorted = sorted_by_trending_date(table);
    let mut seen: HashSet<&str> = HashSet::with_capacity(sorted.len());

    let result: Table<'a> = sorted
        .into_iter()
        .filter(|&r| seen.insert(r.video_id.as_str()))
        .collect();

    tracing::debug!(input = table.len(), output = result.len(), "first-seen projection");
    result
}

/// One row per video: the latest trending observation
pub fn last_seen<'a>(table: &Table<'a>) -> Table<'a> {
    let sorted = sorted_by_trending_date(table);

    let mut last_index: HashMap<&str, usize> = HashMap::with_capacity(sorted.len());
    for (i, &r) in sorted.iter().enumerate() {
        last_index.insert(r.video_id.as_str(), i);
    }

    let result: Table<'a> = sorted
        .iter()
        .enumerate()
        .filter(|&(i, &r)| last_index.get(r.video_id.as_str()) == Some(&i))
        .map(|(_, &r)| r)
        .collect();

    tracing::debug!(input = table.len(), output = result.len(), "last-seen projection");
    result
}

fn sorted_by_trending_date<'a>(table: &Table<'a>) -> Vec<&'a VideoRecord> {
    let mut rows = table.rows().to_vec();
    // stable: equal dates keep input order
    rows.sort_by_key(|r| r.trending_date);
    rows
}
