//! Publish-time distributions
//!
//! - [`publish_hour_histogram`]: 30-minute bins of the time of day, stacked by
//!   category (top N plus Others)
//! - [`publish_date_histogram`]: videos per publish day, zero-filled, latest
//!   day flagged

use chrono::{Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::Serialize;
use trendboard_store::Table;

use crate::classify::{OTHERS, classify_top_n, rank_by_count};

/// Number of half-hour bins in a day
pub const PUBLISH_BINS: usize = 48;

/// Categories stacked individually in the hour histogram
pub const TOP_CATEGORIES: usize = 5;

/// Half-hour bin of a timestamp (`0` = 0:00–0:29, `47` = 23:30–23:59)
pub fn bin_index(at: NaiveDateTime) -> usize {
    (at.hour() as usize) * 2 + (at.minute() as usize) / 30
}

/// Label of a bin, e.g. `0:00`, `13:30`
pub fn bin_label(index: usize) -> String {
    format!("{}:{:02}", index / 2, (index % 2) * 30)
}

/// Per-category counts across the 48 bins
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourSeries {
    /// Category name, or `"Others"`
    pub category: String,
    /// One count per bin
    pub counts: Vec<usize>,
}

impl HourSeries {
    fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            counts: vec![0; PUBLISH_BINS],
        }
    }

    /// Sum over all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Stacked publish-hour histogram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishHourHistogram {
    /// Bin labels, `0:00` through `23:30`
    pub bins: Vec<String>,
    /// Kept categories that have rows, in rank order, then Others if any
    pub series: Vec<HourSeries>,
}

impl PublishHourHistogram {
    /// Sum over all series and bins
    pub fn total(&self) -> usize {
        self.series.iter().map(HourSeries::total).sum()
    }

    /// Find a series by category
    pub fn series(&self, category: &str) -> Option<&HourSeries> {
        self.series.iter().find(|s| s.category == category)
    }
}

/// Hour histogram with the default top-5 categories
///
/// The top categories come from `reference` (normally the first-seen
/// projection of the whole dataset) so the stacking is stable across windows.
pub fn publish_hour_histogram(table: &Table<'_>, reference: &Table<'_>) -> PublishHourHistogram {
    publish_hour_histogram_top_n(table, reference, TOP_CATEGORIES)
}

/// Hour histogram keeping the `n` most frequent categories of `reference`
///
/// Rows without a publish timestamp are not counted.
pub fn publish_hour_histogram_top_n(
    table: &Table<'_>,
    reference: &Table<'_>,
    n: usize,
) -> PublishHourHistogram {
    let ranked = rank_by_count(reference.iter().map(|r| r.category.as_str()));
    let top = classify_top_n(&ranked, n);

    let mut kept: Vec<HourSeries> = top.kept().iter().map(HourSeries::new).collect();
    let mut others = HourSeries::new(OTHERS);

    for record in table.iter() {
        let Some(at) = record.published_at else {
            continue;
        };
        let series = match top.position(&record.category) {
            Some(i) => &mut kept[i],
            None => &mut others,
        };
        series.counts[bin_index(at)] += 1;
    }

    let mut series: Vec<HourSeries> = kept.into_iter().filter(|s| s.total() > 0).collect();
    if others.total() > 0 {
        series.push(others);
    }

    PublishHourHistogram {
        bins: (0..PUBLISH_BINS).map(bin_label).collect(),
        series,
    }
}

/// Videos published on one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishDay {
    /// Publish date
    pub date: NaiveDate,
    /// Number of rows published that day
    pub count: usize,
    /// Set on the most recent day for emphasis
    pub latest: bool,
}

/// Daily publish counts from the earliest to the latest publish date
///
/// Days without publications are zero-filled. Empty when no row has a
/// publish timestamp.
pub fn publish_date_histogram(table: &Table<'_>) -> Vec<PublishDay> {
    let dates: Vec<NaiveDate> = table
        .iter()
        .filter_map(|r| r.published_at.map(|t| t.date()))
        .collect();

    let (Some(&first), Some(&last)) = (dates.iter().min(), dates.iter().max()) else {
        return Vec::new();
    };

    let span = (last - first).num_days() as usize + 1;
    let mut counts = vec![0usize; span];
    for d in &dates {
        counts[(*d - first).num_days() as usize] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| PublishDay {
            date: first + Duration::days(i as i64),
            count,
            latest: i + 1 == span,
        })
        .collect()
}
