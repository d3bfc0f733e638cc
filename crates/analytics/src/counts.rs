//! Grouped counts: categories and country of origin

use serde::Serialize;
use trendboard_store::Table;

use crate::classify::{LabelCount, rank_by_count};
use crate::error::{AnalyticsError, Result};

/// ISO 3166 alpha-2 to alpha-3 codes for channel countries in the dataset
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("AU", "AUS"),
    ("CN", "CHN"),
    ("DE", "DEU"),
    ("ES", "ESP"),
    ("GB", "GBR"),
    ("GH", "GHA"),
    ("ID", "IDN"),
    ("IE", "IRL"),
    ("IN", "IND"),
    ("IT", "ITA"),
    ("JP", "JPN"),
    ("KR", "KOR"),
    ("MY", "MYS"),
    ("RU", "RUS"),
    ("US", "USA"),
    ("VN", "VNM"),
];

/// Look up the alpha-3 code for an alpha-2 code
pub fn iso_alpha3(alpha2: &str) -> Option<&'static str> {
    COUNTRY_CODES
        .iter()
        .find(|(two, _)| *two == alpha2)
        .map(|(_, three)| *three)
}

/// Videos per channel country
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCount {
    /// ISO 3166 alpha-3 code
    pub iso_alpha3: String,
    /// Number of rows
    pub count: usize,
}

/// Rows per category, most frequent first
///
/// Counts sum to the number of input rows.
pub fn category_counts(table: &Table<'_>) -> Vec<LabelCount> {
    rank_by_count(table.iter().map(|r| r.category.as_str()))
}

/// Rows per channel country, empty codes excluded
///
/// # Errors
///
/// Returns `UnknownCountryCode` for a non-empty code with no alpha-3 mapping.
pub fn country_origin_counts(table: &Table<'_>) -> Result<Vec<CountryCount>> {
    country_counts(table)
        .into_iter()
        .map(|c| match iso_alpha3(&c.label) {
            Some(code) => Ok(CountryCount {
                iso_alpha3: code.to_string(),
                count: c.count,
            }),
            None => Err(AnalyticsError::UnknownCountryCode(c.label)),
        })
        .collect()
}

/// Like [`country_origin_counts`], but unknown codes are logged and skipped
pub fn country_origin_counts_lenient(table: &Table<'_>) -> Vec<CountryCount> {
    country_counts(table)
        .into_iter()
        .filter_map(|c| match iso_alpha3(&c.label) {
            Some(code) => Some(CountryCount {
                iso_alpha3: code.to_string(),
                count: c.count,
            }),
            None => {
                tracing::warn!(
                    code = %c.label,
                    rows = c.count,
                    "skipping unknown country code"
                );
                None
            }
        })
        .collect()
}

fn country_counts(table: &Table<'_>) -> Vec<LabelCount> {
    rank_by_count(
        table
            .iter()
            .map(|r| r.country.trim())
            .filter(|code| !code.is_empty()),
    )
}
