//! Per-channel view-gain series
//!
//! Each record carries its channel's historical cumulative views. One series
//! is kept per channel (from the channel's latest row) and all series are cut
//! to a shared date window so they line up on one chart.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;
use trendboard_store::{Table, VideoRecord};

/// How many dates to drop from each end of the shared date axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewGainTrim {
    /// Dates dropped from the start
    pub skip_leading: usize,
    /// Dates dropped from the end
    pub skip_trailing: usize,
}

impl Default for ViewGainTrim {
    fn default() -> Self {
        Self {
            skip_leading: 9,
            skip_trailing: 1,
        }
    }
}

impl ViewGainTrim {
    /// Keep every date
    pub fn none() -> Self {
        Self {
            skip_leading: 0,
            skip_trailing: 0,
        }
    }
}

/// Cumulative channel views on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewGainPoint {
    /// Observation date
    pub date: NaiveDate,
    /// Cumulative views
    pub views: u64,
}

/// View-gain series per channel title, alphabetical
///
/// The row of each channel with the latest trending date provides the
/// series; on equal dates the later row in table order wins. The
/// union of all series dates is sorted and trimmed by `trim`; each channel
/// keeps its points inside the remaining window.
pub fn channel_view_gain_series(
    table: &Table<'_>,
    trim: ViewGainTrim,
) -> BTreeMap<String, Vec<ViewGainPoint>> {
    let mut latest: BTreeMap<&str, &VideoRecord> = BTreeMap::new();
    for record in table.iter() {
        let stale = latest
            .get(record.channel_title.as_str())
            .is_some_and(|kept| kept.trending_date > record.trending_date);
        if !stale {
            latest.insert(record.channel_title.as_str(), record);
        }
    }

    let axis: Vec<NaiveDate> = latest
        .values()
        .flat_map(|r| r.view_gains.keys().copied())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let end = axis.len().saturating_sub(trim.skip_trailing);
    let window: &[NaiveDate] = match axis.get(trim.skip_leading..end) {
        Some(w) if !w.is_empty() => w,
        _ => {
            tracing::debug!(
                dates = axis.len(),
                skip_leading = trim.skip_leading,
                skip_trailing = trim.skip_trailing,
                "view-gain window is empty after trimming"
            );
            &[]
        }
    };

    latest
        .into_iter()
        .map(|(channel, record)| {
            let points = window
                .iter()
                .filter_map(|d| {
                    record.view_gains.get(d).map(|&views| ViewGainPoint { date: *d, views })
                })
                .collect();
            (channel.to_string(), points)
        })
        .collect()
}
