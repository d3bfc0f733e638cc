//! Configuration validation
//!
//! Rejects sizes that would produce empty charts:
//! - Zero `top_k`, `leaderboard_size`, `top_rank`, `max_words`
//! - Zero `top_categories` or `top_channel_types`
//! - Zero label width
//! - Empty data path

use crate::Config;
use crate::error::{ConfigError, Result};

/// Validate the entire configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_data(config)?;
    validate_dashboard(config)?;
    validate_labels(config)?;
    Ok(())
}

fn validate_data(config: &Config) -> Result<()> {
    if config.data.path.as_os_str().is_empty() {
        return Err(ConfigError::invalid_value("data", "path", "must not be empty"));
    }
    Ok(())
}

fn validate_dashboard(config: &Config) -> Result<()> {
    let dashboard = &config.dashboard;
    let sizes = [
        ("top_k", dashboard.top_k),
        ("leaderboard_size", dashboard.leaderboard_size),
        ("top_rank", dashboard.top_rank as usize),
        ("top_categories", dashboard.top_categories),
        ("top_channel_types", dashboard.top_channel_types),
        ("max_words", dashboard.max_words),
    ];

    for (field, value) in sizes {
        if value == 0 {
            return Err(ConfigError::invalid_value(
                "dashboard",
                field,
                "must be greater than 0",
            ));
        }
    }
    Ok(())
}

fn validate_labels(config: &Config) -> Result<()> {
    if config.labels.width == 0 {
        return Err(ConfigError::invalid_value(
            "labels",
            "width",
            "must be greater than 0",
        ));
    }

    if let Some((title, _)) = config.labels.overrides.iter().find(|(_, s)| s.is_empty()) {
        return Err(ConfigError::invalid_value(
            "labels",
            "overrides",
            format!("empty suffix for '{}'", title),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn assert_invalid(toml: &str, field: &str) {
        match Config::from_str(toml) {
            Err(ConfigError::InvalidValue { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected invalid {}, got {:?}", field, other),
        }
    }

    #[test]
    fn test_valid_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_top_k() {
        assert_invalid("[dashboard]\ntop_k = 0", "top_k");
    }

    #[test]
    fn test_zero_leaderboard() {
        assert_invalid("[dashboard]\nleaderboard_size = 0", "leaderboard_size");
    }

    #[test]
    fn test_zero_max_words() {
        assert_invalid("[dashboard]\nmax_words = 0", "max_words");
    }

    #[test]
    fn test_zero_top_categories() {
        assert_invalid("[dashboard]\ntop_categories = 0", "top_categories");
    }

    #[test]
    fn test_zero_label_width() {
        assert_invalid("[labels]\nwidth = 0", "width");
    }

    #[test]
    fn test_empty_override_suffix() {
        assert_invalid("[labels.overrides]\n\"Some title\" = \"\"", "overrides");
    }

    #[test]
    fn test_empty_data_path() {
        assert_invalid("[data]\npath = \"\"", "path");
    }

    #[test]
    fn test_zero_view_gain_trim_is_valid() {
        let config = Config::from_str("[dashboard.view_gain]\nskip_leading = 0\nskip_trailing = 0");
        assert!(config.is_ok());
    }
}
