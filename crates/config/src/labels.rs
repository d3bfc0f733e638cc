//! Chart label configuration

use std::collections::BTreeMap;

use serde::Deserialize;

/// Label shortening configuration
///
/// The built-in override table covers titles known to collide after
/// truncation. Entries under `[labels.overrides]` are added on top and win
/// over built-in entries for the same title.
///
/// # Example
///
/// ```toml
/// [labels]
/// width = 20
/// builtin_overrides = true
///
/// [labels.overrides]
/// "BLACKPINK - 'How You Like That' M/V" = "...1"
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LabelsConfig {
    /// Maximum label width in characters
    /// Default: 20
    pub width: usize,

    /// Keep the built-in collision table
    /// Default: true
    pub builtin_overrides: bool,

    /// Extra overrides, title to suffix
    pub overrides: BTreeMap<String, String>,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            width: 20,
            builtin_overrides: true,
            overrides: BTreeMap::new(),
        }
    }
}
