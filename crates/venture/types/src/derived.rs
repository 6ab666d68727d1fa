//! Values derived from a report. Recomputed on every call, never stored.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::report::CompetitorRecord;

/// Risk score at or above which a risk is high
pub const HIGH_RISK_THRESHOLD: i64 = 15;
/// Risk score at or above which a risk is at least medium
pub const MEDIUM_RISK_THRESHOLD: i64 = 8;

/// Summary statistics over the competitor list
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStats {
    pub average_rating: f64,
    pub total_reviews: u64,
    pub top_rating: f64,
    /// Record with the most reviews; serialized as `{}` when there is none
    #[serde(serialize_with = "leader_or_empty")]
    pub market_leader: Option<CompetitorRecord>,
    pub competitor_count: usize,
}

fn leader_or_empty<S: Serializer>(
    leader: &Option<CompetitorRecord>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match leader {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

/// Severity bucket of a risk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskCategory {
    Low,
    Medium,
    High,
}

impl RiskCategory {
    pub fn for_score(score: i64) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number of risks per severity bucket
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskCategoryCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl RiskCategoryCounts {
    pub fn record(&mut self, category: RiskCategory) {
        match category {
            RiskCategory::High => self.high += 1,
            RiskCategory::Medium => self.medium += 1,
            RiskCategory::Low => self.low += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }
}

/// One month of a revenue projection
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ProjectionPoint {
    /// 1-based
    pub month: u32,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl ProjectionPoint {
    /// Build a point; profit is always revenue minus expenses.
    pub fn new(month: u32, revenue: f64, expenses: f64) -> Self {
        Self {
            month,
            revenue,
            expenses,
            profit: revenue - expenses,
        }
    }
}

/// Severity of an insight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Warning,
    Info,
}

/// A rule-derived statement about market conditions
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}
