//! Dates command - List the trending-date domain
//!
//! # Usage
//!
//! ```bash
//! trendboard dates
//! trendboard dates --format json
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use trendboard_store::RecordStore;

/// Dates command arguments
#[derive(Args, Debug)]
pub struct DatesArgs {
    /// Output format (table, json)
    #[arg(short, long, default_value = "table")]
    pub format: String,
}

#[derive(Debug, Serialize)]
struct DateEntry {
    index: usize,
    date: chrono::NaiveDate,
    label: String,
}

/// Run the dates command
pub fn run(args: DatesArgs, store: &RecordStore) -> Result<()> {
    let domain = store.date_domain();
    let entries: Vec<DateEntry> = domain
        .dates()
        .iter()
        .enumerate()
        .map(|(index, &date)| DateEntry {
            index,
            date,
            label: domain.label(index).unwrap_or_default(),
        })
        .collect();

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{}", json);
        }
        _ => {
            println!("{:>5}  {:<12} {:<8}", "Index", "Date", "Label");
            println!("{}", "-".repeat(27));
            for entry in &entries {
                println!(
                    "{:>5}  {:<12} {:<8}",
                    entry.index,
                    entry.date.to_string(),
                    entry.label
                );
            }
            println!("{}", "-".repeat(27));
            println!("{} dates, {} rows", domain.len(), store.len());
        }
    }

    Ok(())
}
