//! Daily command - One trending date
//!
//! # Usage
//!
//! ```bash
//! # First trending date
//! trendboard daily
//!
//! trendboard daily --date 2020-07-08 --format json
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Args;
use trendboard_analytics::{Dashboard, DashboardSettings};
use trendboard_store::RecordStore;

use super::output;

/// Daily command arguments
#[derive(Args, Debug)]
pub struct DailyArgs {
    /// Trending date (YYYY-MM-DD). Defaults to the first date in the dataset.
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the daily command
pub fn run(args: DailyArgs, store: &RecordStore, settings: DashboardSettings) -> Result<()> {
    let date = match args.date {
        Some(date) => date,
        None => store
            .date_domain()
            .first()
            .context("dataset has no trending dates")?,
    };

    let dashboard = Dashboard::new(store, settings);
    let view = dashboard
        .daily(date)
        .with_context(|| format!("failed to build daily view for {}", date))?;

    match args.format.as_str() {
        "json" => output::print_json(&view),
        _ => {
            output::print_daily(&view);
            Ok(())
        }
    }
}
