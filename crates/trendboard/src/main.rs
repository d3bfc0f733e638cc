//! Trendboard - Trending-video dashboard reports
//!
//! # Usage
//!
//! ```bash
//! # List trending dates and their slider indices
//! trendboard dates
//!
//! # Daily view for one trending date
//! trendboard daily --date 2020-07-08
//!
//! # Weekly view over domain indices 0..=6, as JSON
//! trendboard weekly --start 0 --end 6 --format json
//!
//! # Use a config file and a different dataset
//! trendboard --config configs/trendboard.toml --data trending.json daily
//! ```

mod cmd;

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use trendboard_config::{Config, LogConfig, LogFormat, LogOutput};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Trendboard - Trending-video dashboard reports
#[derive(Parser, Debug)]
#[command(name = "trendboard")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file (error if specified but not found)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config file.
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Dataset path. Overrides [data].path.
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List trending dates with their indices
    Dates(cmd::dates::DatesArgs),

    /// Daily dashboard view
    Daily(cmd::daily::DailyArgs),

    /// Weekly dashboard view over a range of date indices
    Weekly(cmd::weekly::WeeklyArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let log_level = resolve_log_level(cli.log_level.as_deref(), &config);
    init_logging(&log_level, &config.log)?;

    let data_path = cli.data.unwrap_or_else(|| config.data.path.clone());
    let store = cmd::load_store(&data_path)?;

    match cli.command {
        Command::Dates(args) => cmd::dates::run(args, &store),
        Command::Daily(args) => cmd::daily::run(args, &store, cmd::dashboard_settings(&config)),
        Command::Weekly(args) => cmd::weekly::run(args, &store, cmd::dashboard_settings(&config)),
    }
}

/// Load the config file if one was given, defaults otherwise
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

/// Resolve log level: CLI flag > config file > default "info"
fn resolve_log_level(cli_level: Option<&str>, config: &Config) -> String {
    match cli_level {
        Some(level) => level.to_string(),
        None => config.log.level.as_str().to_string(),
    }
}

/// Initialize the tracing subscriber for logging
fn init_logging(level: &str, log: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("invalid log level: {}", e))?;

    let ansi = log.output.ansi();
    let writer = match &log.output {
        LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            BoxMakeWriter::new(Arc::new(file))
        }
    };

    match log.format {
        LogFormat::Console => tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .with(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(writer))
            .with(filter)
            .init(),
    }

    Ok(())
}
