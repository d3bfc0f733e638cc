//! Chart label shortening
//!
//! Long titles are cut to a fixed width for axis labels. Some titles share
//! the same prefix after cutting and would render as one bar label; those
//! are listed in an override table and get a distinguishing suffix instead
//! of the plain ellipsis.

use std::collections::HashMap;

/// Default label width in characters
pub const DEFAULT_LABEL_WIDTH: usize = 20;

/// Appended to generic truncations
pub const ELLIPSIS: &str = "...";

/// Suffix for titles in the default override table
pub const COLLISION_SUFFIX: &str = "...1";

/// Titles known to collide with another title after truncation
pub const KNOWN_COLLISIONS: &[&str] = &[
    "BLACKPINK - 'How You Like That' M/V",
    "Tiara Andini - Maafkan Aku #TerlanjurMencinta (Official Music Video)",
    "Ziva Magnolya - Tak Sanggup Melupa #TerlanjurMencinta (Official Music Video)",
    "Lyodra - Mengapa Kita #TerlanjurMencinta (Official Music Video)",
];

/// Fixed-width label shortener with per-title overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelShortener {
    max_chars: usize,
    overrides: HashMap<String, String>,
}

impl Default for LabelShortener {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_WIDTH)
    }
}

impl LabelShortener {
    /// Shortener with the default override table
    pub fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            overrides: KNOWN_COLLISIONS
                .iter()
                .map(|t| (t.to_string(), COLLISION_SUFFIX.to_string()))
                .collect(),
        }
    }

    /// Shortener with no overrides
    pub fn without_overrides(max_chars: usize) -> Self {
        Self {
            max_chars,
            overrides: HashMap::new(),
        }
    }

    /// Add or replace an override (title → suffix)
    pub fn with_override(mut self, title: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.overrides.insert(title.into(), suffix.into());
        self
    }

    /// Add or replace several overrides
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.overrides
            .extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Configured width
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Number of overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Shorten a title
    ///
    /// Titles shorter than the width are returned unchanged. Override titles
    /// keep `max_chars - 1` characters plus their suffix; others keep
    /// `max_chars` characters plus `...`. Widths count characters, not bytes.
    pub fn shorten(&self, title: &str) -> String {
        if title.chars().count() < self.max_chars {
            return title.to_string();
        }

        match self.overrides.get(title) {
            Some(suffix) => {
                let mut label = take_chars(title, self.max_chars.saturating_sub(1));
                label.push_str(suffix);
                label
            }
            None => {
                let mut label = take_chars(title, self.max_chars);
                label.push_str(ELLIPSIS);
                label
            }
        }
    }
}

/// Shorten with the default override table
pub fn shorten(title: &str, max_chars: usize) -> String {
    LabelShortener::new(max_chars).shorten(title)
}

fn take_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}
