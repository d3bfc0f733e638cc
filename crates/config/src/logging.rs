//! Logging configuration
//!
//! Controls diagnostic logging of the Trendboard CLI. Logs go to stderr by
//! default so they never mix with report output on stdout.

use serde::Deserialize;

/// Minimum severity written to the log
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Per-aggregation detail
    Trace,
    /// Window sizes and skipped rows
    Debug,
    /// Dataset load summary (default)
    #[default]
    Info,
    /// Dropped countries and empty charts
    Warn,
    Error,
}

impl LogLevel {
    /// Directive for `EnvFilter`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Plain text lines (default)
    #[default]
    Console,
    /// One JSON object per event
    Json,
}

/// Where log lines go
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Mixes with report output, only useful together with `--format json`
    /// piped elsewhere
    Stdout,
    #[default]
    Stderr,
    /// Appended to the file at this path
    #[serde(untagged)]
    File(String),
}

impl LogOutput {
    /// Colour codes are only written to terminals, never to a log file
    pub fn ansi(&self) -> bool {
        !matches!(self, Self::File(_))
    }
}

/// Logging configuration
///
/// # Example
///
/// ```toml
/// [log]
/// level = "info"
/// format = "console"
/// output = "stderr"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    /// Default: info
    pub level: LogLevel,

    /// Output format (console, json)
    /// Default: console
    pub format: LogFormat,

    /// Output destination (stdout, stderr, or file path)
    /// Default: stderr
    pub output: LogOutput,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Console,
            output: LogOutput::Stderr,
        }
    }
}
