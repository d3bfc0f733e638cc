//! Rankings: top videos by engagement, top-ranked videos, channel leaderboard

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use trendboard_store::{Table, VideoRecord};

/// Default number of entries in top-K charts
pub const DEFAULT_TOP_K: usize = 10;

/// Engagement counter used for top-K rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementMetric {
    /// View count
    Views,
    /// Like count
    Likes,
    /// Comment count
    Comments,
}

impl EngagementMetric {
    /// Every metric, in dashboard order
    pub const ALL: [EngagementMetric; 3] = [Self::Views, Self::Likes, Self::Comments];

    /// Read this metric from a record
    pub fn value(&self, record: &VideoRecord) -> u64 {
        match self {
            Self::Views => record.view_count,
            Self::Likes => record.likes,
            Self::Comments => record.comment_count,
        }
    }

    /// Metric name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Views => "views",
            Self::Likes => "likes",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for EngagementMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A video and its value for one metric
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricEntry {
    /// Video identifier
    pub video_id: String,
    /// Full title
    pub title: String,
    /// Metric value
    pub value: u64,
}

/// The `k` largest rows by `metric`, in ascending order
///
/// The sort is stable, so tied rows keep their input order and the later of
/// two tied rows ranks higher. Deduplicate first (usually
/// [`last_seen`](trendboard_store::last_seen)) when the table spans several
/// days.
pub fn top_k_by_metric(table: &Table<'_>, metric: EngagementMetric, k: usize) -> Vec<MetricEntry> {
    let mut rows = table.rows().to_vec();
    rows.sort_by_key(|r| metric.value(r));

    let skip = rows.len().saturating_sub(k);
    rows[skip..]
        .iter()
        .map(|r| MetricEntry {
            video_id: r.video_id.clone(),
            title: r.title.clone(),
            value: metric.value(r),
        })
        .collect()
}

/// Row of the daily "top ranked" table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedVideo {
    /// Trending position
    pub rank: u32,
    /// Full title
    pub title: String,
    /// Thumbnail URL (fetched by the renderer)
    pub thumbnail_link: String,
    /// Raw view count
    pub view_count: u64,
    /// Views in millions, e.g. `1.2M`
    pub views_display: String,
}

/// Rows ranked `1..=max_rank`, ordered by rank
pub fn top_ranked(table: &Table<'_>, max_rank: u32) -> Vec<RankedVideo> {
    let mut rows: Vec<&VideoRecord> = table.iter().filter(|r| r.rank <= max_rank).collect();
    rows.sort_by_key(|r| r.rank);

    rows.into_iter()
        .map(|r| RankedVideo {
            rank: r.rank,
            title: r.title.clone(),
            thumbnail_link: r.thumbnail_link.clone(),
            view_count: r.view_count,
            views_display: format_millions(r.view_count),
        })
        .collect()
}

/// Format a count in millions with one decimal, e.g. `1234567` → `1.2M`
pub fn format_millions(value: u64) -> String {
    format!("{:.1}M", value as f64 / 1_000_000.0)
}

/// Channel row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelEntry {
    /// Channel display name
    pub channel_title: String,
    /// Avatar URL (fetched by the renderer)
    pub avatar_url: String,
    /// Channel category
    pub channel_type: String,
    /// Current subscribers
    pub subscribers: u64,
    /// Rows for this channel in the table
    pub video_count: usize,
}

/// Channels with the most rows, most first, truncated to `k`
///
/// Channels are identified by (title, avatar, type, subscribers). Ties keep
/// first-appearance order.
pub fn channel_leaderboard(table: &Table<'_>, k: usize) -> Vec<ChannelEntry> {
    let mut positions: HashMap<(&str, &str, &str, u64), usize> = HashMap::new();
    let mut entries: Vec<ChannelEntry> = Vec::new();

    for r in table.iter() {
        let key = (
            r.channel_title.as_str(),
            r.avatar_url.as_str(),
            r.channel_type.as_str(),
            r.subscribers,
        );
        match positions.get(&key) {
            Some(&i) => entries[i].video_count += 1,
            None => {
                positions.insert(key, entries.len());
                entries.push(ChannelEntry {
                    channel_title: r.channel_title.clone(),
                    avatar_url: r.avatar_url.clone(),
                    channel_type: r.channel_type.clone(),
                    subscribers: r.subscribers,
                    video_count: 1,
                });
            }
        }
    }

    entries.sort_by(|a, b| b.video_count.cmp(&a.video_count));
    entries.truncate(k);
    entries
}
