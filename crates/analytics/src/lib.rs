//! Trendboard Analytics Engine
//!
//! Aggregations over trending-video tables.
//!
//! # Overview
//!
//! This crate provides the analytics layer for Trendboard, built on top of
//! `trendboard-store`. It includes:
//!
//! - **Counts**: categories, channel country of origin
//! - **Rankings**: top videos by engagement, top-ranked videos, channel leaderboard
//! - **Distributions**: publish hour and date, social-blade rank tiers
//! - **Correlation**: Pearson matrix over numeric columns
//! - **Series**: per-channel cumulative views
//! - **Text**: word frequencies, chart label shortening
//! - **Dashboard**: daily and weekly views composed from the above
//!
//! # Usage
//!
//! ```ignore
//! use trendboard_analytics::{Dashboard, DashboardSettings};
//! use trendboard_store::{JsonFileSource, RecordStore};
//!
//! let store = RecordStore::load(&JsonFileSource::new("data/final.jsonl"))?;
//! let dashboard = Dashboard::new(&store, DashboardSettings::default());
//!
//! let week = dashboard.weekly(0, 6)?;
//! for chart in &week.top_charts {
//!     println!("{}: {} entries", chart.metric, chart.entries.len());
//! }
//! ```

pub mod classify;
pub mod correlation;
pub mod counts;
pub mod dashboard;
pub mod error;
pub mod labels;
pub mod publish;
pub mod ranking;
pub mod series;
pub mod tiers;
pub mod words;

#[cfg(test)]
mod correlation_test;
#[cfg(test)]
mod dashboard_test;
#[cfg(test)]
mod publish_test;
#[cfg(test)]
mod series_test;

// Re-exports for convenience
pub use classify::{LabelCount, OTHERS, TopN, classify_top_n, rank_by_count};
pub use correlation::{CorrelationMatrix, NumericColumn, correlation_matrix};
pub use counts::{
    CountryCount, category_counts, country_origin_counts, country_origin_counts_lenient,
    iso_alpha3,
};
pub use dashboard::{
    DailyView, Dashboard, DashboardSettings, DashboardView, LabeledEntry, TopChart, WeeklyView,
    WordCloud,
};
pub use error::{AnalyticsError, Result};
pub use labels::{DEFAULT_LABEL_WIDTH, LabelShortener, shorten};
pub use publish::{
    HourSeries, PublishDay, PublishHourHistogram, bin_index, bin_label, publish_date_histogram,
    publish_hour_histogram, publish_hour_histogram_top_n,
};
pub use ranking::{
    ChannelEntry, DEFAULT_TOP_K, EngagementMetric, MetricEntry, RankedVideo, channel_leaderboard,
    format_millions, top_k_by_metric, top_ranked,
};
pub use series::{ViewGainPoint, ViewGainTrim, channel_view_gain_series};
pub use tiers::{RankTier, RankTierMatrix, TierRow, rank_tier_distribution, rank_tier_distribution_top_n};
pub use words::{DEFAULT_MAX_WORDS, TextField, WordCount, token_frequencies};
