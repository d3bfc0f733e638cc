//! Count ranking and top-N classification
//!
//! Several charts keep the N most frequent labels and fold everything else
//! into a single `"Others"` bucket. The ranking is computed once per
//! aggregation with [`rank_by_count`] and [`classify_top_n`].

use std::collections::HashMap;

use serde::Serialize;

/// Bucket for labels outside the top N
pub const OTHERS: &str = "Others";

/// A label and how many rows carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelCount {
    /// The label value (category, channel type, ...)
    pub label: String,
    /// Number of rows
    pub count: usize,
}

impl LabelCount {
    /// Create a new label count
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Count labels, most frequent first
///
/// Ties keep first-appearance order.
pub fn rank_by_count<'s>(labels: impl IntoIterator<Item = &'s str>) -> Vec<LabelCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<LabelCount> = Vec::new();

    for label in labels {
        match positions.get(label) {
            Some(&i) => counts[i].count += 1,
            None => {
                positions.insert(label, counts.len());
                counts.push(LabelCount::new(label, 1));
            }
        }
    }

    // stable: equal counts stay in first-appearance order
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The labels kept by a top-N cut
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TopN {
    kept: Vec<String>,
}

impl TopN {
    /// Kept labels, most frequent first
    pub fn kept(&self) -> &[String] {
        &self.kept
    }

    /// Check if a label is kept
    pub fn contains(&self, label: &str) -> bool {
        self.kept.iter().any(|k| k == label)
    }

    /// Position of a kept label, or `None` for labels folded into Others
    pub fn position(&self, label: &str) -> Option<usize> {
        self.kept.iter().position(|k| k == label)
    }

    /// Map a label to itself if kept, otherwise to [`OTHERS`]
    pub fn label<'a>(&'a self, label: &'a str) -> &'a str {
        if self.contains(label) { label } else { OTHERS }
    }
}

/// Keep the first `n` labels of a ranked count list
pub fn classify_top_n(ranked: &[LabelCount], n: usize) -> TopN {
    TopN {
        kept: ranked.iter().take(n).map(|c| c.label.clone()).collect(),
    }
}
