//! Word frequencies for word clouds

use serde::Serialize;
use trendboard_store::{Table, VideoRecord};

use crate::classify::rank_by_count;

/// Default number of words per cloud
pub const DEFAULT_MAX_WORDS: usize = 200;

/// Text source for a word cloud
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    /// Cleaned title tokens
    Title,
    /// Cleaned description tokens
    Description,
    /// Raw tags
    Tags,
}

impl TextField {
    /// Every field, in dashboard order
    pub const ALL: [TextField; 3] = [Self::Title, Self::Description, Self::Tags];

    /// Field name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
        }
    }

    fn texts<'r>(&self, record: &'r VideoRecord) -> Vec<&'r str> {
        match self {
            Self::Title => record.title_tokens.iter().map(String::as_str).collect(),
            Self::Description => record.description_tokens.iter().map(String::as_str).collect(),
            Self::Tags => record.tag_list(),
        }
    }
}

/// A word and its frequency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    /// The word
    pub word: String,
    /// Occurrences
    pub count: usize,
}

/// Most frequent words of a text field, truncated to `max_words`
///
/// Every token or tag is split on whitespace. Ties keep first-appearance
/// order.
pub fn token_frequencies(table: &Table<'_>, field: TextField, max_words: usize) -> Vec<WordCount> {
    let words = table
        .iter()
        .flat_map(|r| field.texts(r))
        .flat_map(str::split_whitespace);

    rank_by_count(words)
        .into_iter()
        .take(max_words)
        .map(|c| WordCount {
            word: c.label,
            count: c.count,
        })
        .collect()
}
