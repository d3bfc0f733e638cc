//! Daily and weekly dashboard views
//!
//! Composes the aggregation catalogue the way the dashboard tabs use it. Each
//! chart picks its own deduplication policy:
//!
//! | Chart | Daily input | Weekly input |
//! |-------|-------------|--------------|
//! | categories | day | first-seen, windowed |
//! | top by metric | day | last-seen of window |
//! | publish date / hour | day | first-seen, windowed |
//! | channel leaderboard | day | window |
//! | country of origin | day | last-seen of window |
//! | rank tiers | - | last-seen of window |
//! | correlation, word clouds | - | first-seen, windowed |
//! | view-gain series | - | window |
//!
//! Publish-hour stacking always uses the top categories of the whole
//! dataset's first-seen projection.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use trendboard_store::{
    RecordStore, Table, Window, first_seen, last_seen, select_day, select_range,
};

use crate::classify::LabelCount;
use crate::correlation::{CorrelationMatrix, NumericColumn, correlation_matrix};
use crate::counts::{CountryCount, category_counts, country_origin_counts_lenient};
use crate::error::{AnalyticsError, Result};
use crate::labels::LabelShortener;
use crate::publish::{
    PublishDay, PublishHourHistogram, TOP_CATEGORIES, publish_date_histogram,
    publish_hour_histogram_top_n,
};
use crate::ranking::{
    ChannelEntry, DEFAULT_TOP_K, EngagementMetric, RankedVideo, channel_leaderboard,
    top_k_by_metric, top_ranked,
};
use crate::series::{ViewGainPoint, ViewGainTrim, channel_view_gain_series};
use crate::tiers::{RankTierMatrix, TOP_CHANNEL_TYPES, rank_tier_distribution_top_n};
use crate::words::{DEFAULT_MAX_WORDS, TextField, WordCount, token_frequencies};

/// Tunables for dashboard composition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Entries per top-by-metric chart
    pub top_k: usize,
    /// Channels in the leaderboard
    pub leaderboard_size: usize,
    /// Highest rank shown in the daily top-ranked table
    pub top_rank: u32,
    /// Categories stacked individually in the hour histogram
    pub top_categories: usize,
    /// Channel types shown individually in the tier matrix
    pub top_channel_types: usize,
    /// Words per word cloud
    pub max_words: usize,
    /// Trim of the shared view-gain axis
    pub view_gain_trim: ViewGainTrim,
    /// Chart label shortener
    pub labels: LabelShortener,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            leaderboard_size: DEFAULT_TOP_K,
            top_rank: DEFAULT_TOP_K as u32,
            top_categories: TOP_CATEGORIES,
            top_channel_types: TOP_CHANNEL_TYPES,
            max_words: DEFAULT_MAX_WORDS,
            view_gain_trim: ViewGainTrim::default(),
            labels: LabelShortener::default(),
        }
    }
}

/// A top-K entry with its chart label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledEntry {
    /// Shortened label for the axis
    pub label: String,
    /// Full title for hover text
    pub title: String,
    /// Metric value
    pub value: u64,
}

/// One top-by-metric chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopChart {
    /// Ranked metric
    pub metric: EngagementMetric,
    /// Entries, ascending by value
    pub entries: Vec<LabeledEntry>,
}

/// Word cloud input for one text field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCloud {
    /// Text source
    pub field: TextField,
    /// Most frequent words
    pub words: Vec<WordCount>,
}

/// Everything the daily tab shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyView {
    /// Selected trending date
    pub date: NaiveDate,
    /// Rows on that date
    pub rows: usize,
    /// Category counts
    pub categories: Vec<LabelCount>,
    /// Top-ranked videos of the day
    pub top_ranked: Vec<RankedVideo>,
    /// Top videos by views, likes, comments
    pub top_charts: Vec<TopChart>,
    /// Videos per publish day
    pub publish_dates: Vec<PublishDay>,
    /// Publish time of day by category
    pub publish_hours: PublishHourHistogram,
    /// Channels with most trending videos
    pub channels: Vec<ChannelEntry>,
    /// Channel countries
    pub countries: Vec<CountryCount>,
}

/// Everything the weekly tab shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyView {
    /// First date of the window
    pub start: NaiveDate,
    /// Last date of the window (inclusive)
    pub end: NaiveDate,
    /// Rows in the window
    pub rows: usize,
    /// Distinct videos first seen in the window
    pub unique_videos: usize,
    /// Category counts of unique videos
    pub categories: Vec<LabelCount>,
    /// Correlation of numeric columns; `None` with fewer than two videos
    pub correlation: Option<CorrelationMatrix>,
    /// Top videos by views, likes, comments (latest counters)
    pub top_charts: Vec<TopChart>,
    /// Title, description and tag word clouds
    pub word_clouds: Vec<WordCloud>,
    /// Unique videos per publish day
    pub publish_dates: Vec<PublishDay>,
    /// Publish time of day by category
    pub publish_hours: PublishHourHistogram,
    /// Channels with most trending rows
    pub channels: Vec<ChannelEntry>,
    /// Channel countries
    pub countries: Vec<CountryCount>,
    /// Social-blade tiers by channel type
    pub rank_tiers: RankTierMatrix,
    /// Cumulative channel views
    pub view_gains: BTreeMap<String, Vec<ViewGainPoint>>,
}

/// Dashboard over a loaded store
#[derive(Debug, Clone)]
pub struct Dashboard<'s> {
    store: &'s RecordStore,
    settings: DashboardSettings,
}

impl<'s> Dashboard<'s> {
    /// Create a dashboard
    pub fn new(store: &'s RecordStore, settings: DashboardSettings) -> Self {
        Self { store, settings }
    }

    /// Active settings
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Compute the view for a window
    pub fn view(&self, window: Window) -> Result<DashboardView> {
        match window {
            Window::Day { date } => self.daily(date).map(DashboardView::Daily),
            Window::Range { start, end } => self.weekly(start, end).map(DashboardView::Weekly),
        }
    }

    /// Daily view for one trending date
    ///
    /// # Errors
    ///
    /// Fails when `date` is not part of the date domain.
    pub fn daily(&self, date: NaiveDate) -> Result<DailyView> {
        self.store.date_domain().index_of(date)?;

        let full = self.store.table();
        let day = select_day(&full, date);
        let reference = first_seen(&full);

        tracing::debug!(date = %date, rows = day.len(), "computing daily view");

        Ok(DailyView {
            date,
            rows: day.len(),
            categories: category_counts(&day),
            top_ranked: top_ranked(&day, self.settings.top_rank),
            top_charts: self.top_charts(&day),
            publish_dates: publish_date_histogram(&day),
            publish_hours: publish_hour_histogram_top_n(
                &day,
                &reference,
                self.settings.top_categories,
            ),
            channels: channel_leaderboard(&day, self.settings.leaderboard_size),
            countries: country_origin_counts_lenient(&day),
        })
    }

    /// Weekly view for an inclusive range of date-domain indices
    ///
    /// # Errors
    ///
    /// Fails with `InvalidRange` for inverted or out-of-bounds indices.
    pub fn weekly(&self, start: usize, end: usize) -> Result<WeeklyView> {
        let domain = self.store.date_domain();
        let (first, last) = domain.bounds(start, end)?;

        let full = self.store.table();
        let window = select_range(&full, domain, start, end)?;
        let reference = first_seen(&full);
        let unique = select_range(&reference, domain, start, end)?;
        let latest = last_seen(&window);

        tracing::debug!(
            start = %first,
            end = %last,
            rows = window.len(),
            unique = unique.len(),
            "computing weekly view"
        );

        let correlation = match correlation_matrix(&unique, &NumericColumn::ALL) {
            Ok(matrix) => Some(matrix),
            Err(AnalyticsError::InsufficientData { required, actual }) => {
                tracing::debug!(required, actual, "not enough videos for correlation");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(WeeklyView {
            start: first,
            end: last,
            rows: window.len(),
            unique_videos: unique.len(),
            categories: category_counts(&unique),
            correlation,
            top_charts: self.top_charts(&latest),
            word_clouds: TextField::ALL
                .iter()
                .map(|&field| WordCloud {
                    field,
                    words: token_frequencies(&unique, field, self.settings.max_words),
                })
                .collect(),
            publish_dates: publish_date_histogram(&unique),
            publish_hours: publish_hour_histogram_top_n(
                &unique,
                &reference,
                self.settings.top_categories,
            ),
            channels: channel_leaderboard(&window, self.settings.leaderboard_size),
            countries: country_origin_counts_lenient(&latest),
            rank_tiers: rank_tier_distribution_top_n(&latest, self.settings.top_channel_types),
            view_gains: channel_view_gain_series(&window, self.settings.view_gain_trim),
        })
    }

    fn top_charts(&self, table: &Table<'_>) -> Vec<TopChart> {
        EngagementMetric::ALL
            .iter()
            .map(|&metric| TopChart {
                metric,
                entries: top_k_by_metric(table, metric, self.settings.top_k)
                    .into_iter()
                    .map(|e| LabeledEntry {
                        label: self.settings.labels.shorten(&e.title),
                        title: e.title,
                        value: e.value,
                    })
                    .collect(),
            })
            .collect()
    }
}

/// Either dashboard tab
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum DashboardView {
    /// Daily tab
    Daily(DailyView),
    /// Weekly tab
    Weekly(WeeklyView),
}
