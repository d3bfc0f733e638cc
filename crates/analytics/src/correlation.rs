//! Pearson correlation between numeric columns

use std::fmt;

use serde::Serialize;
use trendboard_store::{Table, VideoRecord};

use crate::error::{AnalyticsError, Result};

/// Minimum rows for a correlation
pub const MIN_CORRELATION_ROWS: usize = 2;

/// Numeric record columns available for correlation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericColumn {
    /// View count
    ViewCount,
    /// Like count
    Likes,
    /// Dislike count
    Dislikes,
    /// Comment count
    CommentCount,
    /// Trending rank
    Rank,
    /// Channel subscribers
    Subscribers,
}

impl NumericColumn {
    /// Dashboard column set, in display order
    pub const ALL: [NumericColumn; 6] = [
        Self::ViewCount,
        Self::Likes,
        Self::Dislikes,
        Self::CommentCount,
        Self::Rank,
        Self::Subscribers,
    ];

    /// Column value as a float
    pub fn value(&self, record: &VideoRecord) -> f64 {
        match self {
            Self::ViewCount => record.view_count as f64,
            Self::Likes => record.likes as f64,
            Self::Dislikes => record.dislikes as f64,
            Self::CommentCount => record.comment_count as f64,
            Self::Rank => record.rank as f64,
            Self::Subscribers => record.subscribers as f64,
        }
    }

    /// Column name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewCount => "view_count",
            Self::Likes => "likes",
            Self::Dislikes => "dislikes",
            Self::CommentCount => "comment_count",
            Self::Rank => "rank",
            Self::Subscribers => "subscribers",
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symmetric correlation matrix
///
/// `values[i][j]` is the coefficient between `columns[i]` and `columns[j]`,
/// rounded to two decimals, or `None` when either column is constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationMatrix {
    /// Row and column order
    pub columns: Vec<NumericColumn>,
    /// Coefficients
    pub values: Vec<Vec<Option<f64>>>,
}

impl CorrelationMatrix {
    /// Coefficient between two columns
    pub fn get(&self, a: NumericColumn, b: NumericColumn) -> Option<f64> {
        let i = self.columns.iter().position(|c| *c == a)?;
        let j = self.columns.iter().position(|c| *c == b)?;
        self.values[i][j]
    }
}

/// Pearson correlation of every column pair
///
/// # Errors
///
/// Returns `InsufficientData` for fewer than two rows.
pub fn correlation_matrix(table: &Table<'_>, columns: &[NumericColumn]) -> Result<CorrelationMatrix> {
    if table.len() < MIN_CORRELATION_ROWS {
        return Err(AnalyticsError::InsufficientData {
            required: MIN_CORRELATION_ROWS,
            actual: table.len(),
        });
    }

    let data: Vec<Vec<f64>> = columns
        .iter()
        .map(|c| table.iter().map(|r| c.value(r)).collect())
        .collect();

    let n = columns.len();
    let mut values = vec![vec![None; n]; n];
    for i in 0..n {
        for j in i..n {
            let r = pearson(&data[i], &data[j]).map(round2);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: columns.to_vec(),
        values,
    })
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    // clamp float drift outside [-1, 1]
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

/// Two decimals, halves to even
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
