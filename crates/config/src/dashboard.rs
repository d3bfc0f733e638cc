//! Dashboard tunables
//!
//! Sizes of the ranked charts and the view-gain trim. Every field has a
//! default, so an empty `[dashboard]` section (or none at all) is valid.

use serde::Deserialize;

/// Dashboard configuration
///
/// # Example
///
/// ```toml
/// [dashboard]
/// top_k = 10
/// leaderboard_size = 10
/// top_rank = 10
/// top_categories = 5
/// top_channel_types = 5
/// max_words = 200
///
/// [dashboard.view_gain]
/// skip_leading = 9
/// skip_trailing = 1
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// Entries in each top-by-metric chart
    /// Default: 10
    pub top_k: usize,

    /// Channels in the leaderboard
    /// Default: 10
    pub leaderboard_size: usize,

    /// Highest trending rank in the daily table
    /// Default: 10
    pub top_rank: u32,

    /// Categories stacked individually in the publish-hour chart
    /// Default: 5
    pub top_categories: usize,

    /// Channel types shown individually in the tier chart
    /// Default: 5
    pub top_channel_types: usize,

    /// Words per word cloud
    /// Default: 200
    pub max_words: usize,

    /// View-gain axis trim
    pub view_gain: ViewGainConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            leaderboard_size: 10,
            top_rank: 10,
            top_categories: 5,
            top_channel_types: 5,
            max_words: 200,
            view_gain: ViewGainConfig::default(),
        }
    }
}

/// Dates dropped from each end of the shared view-gain axis
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewGainConfig {
    /// Default: 9
    pub skip_leading: usize,
    /// Default: 1
    pub skip_trailing: usize,
}

impl Default for ViewGainConfig {
    fn default() -> Self {
        Self {
            skip_leading: 9,
            skip_trailing: 1,
        }
    }
}
