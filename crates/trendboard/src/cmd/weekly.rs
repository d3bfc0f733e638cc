//! Weekly command - A range of trending dates
//!
//! Indices refer to positions in the date domain (see `trendboard dates`).
//!
//! # Usage
//!
//! ```bash
//! # Whole dataset
//! trendboard weekly
//!
//! # First seven trending dates
//! trendboard weekly --start 0 --end 6
//! ```

use anyhow::{Context, Result};
use clap::Args;
use trendboard_analytics::{Dashboard, DashboardSettings};
use trendboard_store::RecordStore;

use super::output;

/// Weekly command arguments
#[derive(Args, Debug)]
pub struct WeeklyArgs {
    /// First date index. Defaults to 0.
    #[arg(short, long)]
    pub start: Option<usize>,

    /// Last date index, inclusive. Defaults to the last date.
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

/// Run the weekly command
pub fn run(args: WeeklyArgs, store: &RecordStore, settings: DashboardSettings) -> Result<()> {
    let (first, last) = store
        .date_domain()
        .full_range()
        .context("dataset has no trending dates")?;
    let start = args.start.unwrap_or(first);
    let end = args.end.unwrap_or(last);

    let dashboard = Dashboard::new(store, settings);
    let view = dashboard
        .weekly(start, end)
        .with_context(|| format!("failed to build weekly view for indices {}..={}", start, end))?;

    match args.format.as_str() {
        "json" => output::print_json(&view),
        _ => {
            output::print_weekly(&view);
            Ok(())
        }
    }
}
