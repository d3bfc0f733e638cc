//! Command implementations for the Trendboard CLI

pub mod daily;
pub mod dates;
pub mod output;
pub mod weekly;

use std::path::Path;

use anyhow::{Context, Result};
use trendboard_analytics::{DashboardSettings, LabelShortener, ViewGainTrim};
use trendboard_config::Config;
use trendboard_store::{JsonFileSource, RecordStore};

/// Load the dataset at `path`
pub fn load_store(path: &Path) -> Result<RecordStore> {
    RecordStore::load(&JsonFileSource::new(path))
        .with_context(|| format!("failed to load dataset from {}", path.display()))
}

/// Build dashboard settings from the `[dashboard]` and `[labels]` sections
pub fn dashboard_settings(config: &Config) -> DashboardSettings {
    let dashboard = &config.dashboard;

    let labels = if config.labels.builtin_overrides {
        LabelShortener::new(config.labels.width)
    } else {
        LabelShortener::without_overrides(config.labels.width)
    }
    .with_overrides(config.labels.overrides.clone());

    DashboardSettings {
        top_k: dashboard.top_k,
        leaderboard_size: dashboard.leaderboard_size,
        top_rank: dashboard.top_rank,
        top_categories: dashboard.top_categories,
        top_channel_types: dashboard.top_channel_types,
        max_words: dashboard.max_words,
        view_gain_trim: ViewGainTrim {
            skip_leading: dashboard.view_gain.skip_leading,
            skip_trailing: dashboard.view_gain.skip_trailing,
        },
        labels,
    }
}
