//! Social-blade rank tiers by channel type

use std::fmt;

use serde::Serialize;
use trendboard_store::Table;

use crate::classify::{OTHERS, classify_top_n, rank_by_count};

/// Channel types shown individually; the rest fold into Others
pub const TOP_CHANNEL_TYPES: usize = 5;

/// Social-blade rank tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RankTier {
    #[serde(rename = "A++")]
    APlusPlus,
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "D-")]
    DMinus,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl RankTier {
    /// All tiers in display order
    pub const ALL: [RankTier; 10] = [
        Self::APlusPlus,
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::DMinus,
        Self::NotAvailable,
    ];

    /// Parse a tier string; empty maps to `N/A`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "A++" => Some(Self::APlusPlus),
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "A-" => Some(Self::AMinus),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "B-" => Some(Self::BMinus),
            "C+" => Some(Self::CPlus),
            "D-" => Some(Self::DMinus),
            "" | "N/A" => Some(Self::NotAvailable),
            _ => None,
        }
    }

    /// Display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APlusPlus => "A++",
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::DMinus => "D-",
            Self::NotAvailable => "N/A",
        }
    }

    /// Column index in [`RankTier::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RankTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One channel-type row of the tier matrix
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierRow {
    /// Channel type, or `"Others"`
    pub channel_type: String,
    /// Counts per tier, aligned with [`RankTier::ALL`]
    pub counts: Vec<usize>,
}

impl TierRow {
    fn new(channel_type: impl Into<String>) -> Self {
        Self {
            channel_type: channel_type.into(),
            counts: vec![0; RankTier::ALL.len()],
        }
    }

    /// Count for one tier
    pub fn get(&self, tier: RankTier) -> usize {
        self.counts[tier.index()]
    }

    /// Row total
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Channel type × rank tier counts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankTierMatrix {
    /// Column order
    pub tiers: Vec<RankTier>,
    /// Top channel types in rank order, then Others when present
    pub rows: Vec<TierRow>,
}

impl RankTierMatrix {
    /// Find a row by channel type
    pub fn row(&self, channel_type: &str) -> Option<&TierRow> {
        self.rows.iter().find(|r| r.channel_type == channel_type)
    }

    /// Sum of every cell
    pub fn total(&self) -> usize {
        self.rows.iter().map(TierRow::total).sum()
    }
}

/// Tier distribution with the default top-5 channel types
pub fn rank_tier_distribution(table: &Table<'_>) -> RankTierMatrix {
    rank_tier_distribution_top_n(table, TOP_CHANNEL_TYPES)
}

/// Tier distribution keeping the `n` most frequent channel types
///
/// Unrecognised tier strings are counted as `N/A`.
pub fn rank_tier_distribution_top_n(table: &Table<'_>, n: usize) -> RankTierMatrix {
    let ranked = rank_by_count(table.iter().map(|r| r.channel_type.as_str()));
    let top = classify_top_n(&ranked, n);

    let mut rows: Vec<TierRow> = top.kept().iter().map(TierRow::new).collect();
    let mut others = TierRow::new(OTHERS);

    for record in table.iter() {
        let tier = RankTier::parse(&record.rank_tier).unwrap_or_else(|| {
            tracing::warn!(
                tier = %record.rank_tier,
                channel = %record.channel_title,
                "unrecognised rank tier, counting as N/A"
            );
            RankTier::NotAvailable
        });

        let row = match top.position(&record.channel_type) {
            Some(i) => &mut rows[i],
            None => &mut others,
        };
        row.counts[tier.index()] += 1;
    }

    if others.total() > 0 {
        rows.push(others);
    }

    RankTierMatrix {
        tiers: RankTier::ALL.to_vec(),
        rows,
    }
}
