//! Risk classification

use serde::Serialize;
use venture_types::{RiskCategory, RiskCategoryCounts, RiskRecord};

use crate::labels::{truncate_labels, ChartLabel};

/// Label for a risk without a usable name
pub const UNNAMED_RISK: &str = "Unnamed Risk";
/// Shown when a risk has no index-aligned mitigation strategy
pub const NO_STRATEGY: &str = "No strategy provided.";
/// Label length on the risk bar chart
pub const RISK_LABEL_MAX_CHARS: usize = 40;
/// Headroom added above the largest likelihood/impact on the radar axis
pub const RADAR_HEADROOM: u8 = 10;

/// One bar of the risk score chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RiskBar {
    pub label: ChartLabel,
    pub score: i64,
    pub category: RiskCategory,
}

/// Bucket counts plus the chart series, in input order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskSummary {
    pub counts: RiskCategoryCounts,
    pub series: Vec<RiskBar>,
}

/// Bucket each risk by its supplied score and build the score series.
///
/// A missing score counts as 0 (low). The series is not re-sorted.
pub fn classify(risks: &[RiskRecord]) -> RiskSummary {
    let labels = truncate_labels(
        risks.iter().map(RiskRecord::display_label),
        RISK_LABEL_MAX_CHARS,
        UNNAMED_RISK,
    );

    let mut counts = RiskCategoryCounts::default();
    let series = risks
        .iter()
        .zip(labels)
        .map(|(risk, label)| {
            let score = risk.score_or_zero();
            let category = RiskCategory::for_score(score);
            counts.record(category);
            RiskBar {
                label,
                score,
                category,
            }
        })
        .collect();

    RiskSummary { counts, series }
}

/// A risk with its mitigation strategy, for the detail cards
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RiskDetail {
    pub label: String,
    pub likelihood: Option<u8>,
    pub impact: Option<u8>,
    pub score: i64,
    pub category: RiskCategory,
    pub mitigation: String,
}

/// Pair each risk with the strategy at the same index.
pub fn details(risks: &[RiskRecord], strategies: &[String]) -> Vec<RiskDetail> {
    risks
        .iter()
        .enumerate()
        .map(|(index, risk)| {
            let score = risk.score_or_zero();
            let mitigation = strategies
                .get(index)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .unwrap_or(NO_STRATEGY)
                .to_string();
            RiskDetail {
                label: risk.display_label().unwrap_or(UNNAMED_RISK).to_string(),
                likelihood: risk.likelihood,
                impact: risk.impact,
                score,
                category: RiskCategory::for_score(score),
                mitigation,
            }
        })
        .collect()
}

/// Likelihood and impact of one risk on the radar chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    pub likelihood: u8,
    pub impact: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskRadar {
    pub axes: Vec<RadarAxis>,
    /// Upper bound of the radial axis; 0 when there are no risks
    pub axis_max: u8,
}

pub fn radar(risks: &[RiskRecord]) -> RiskRadar {
    let axes: Vec<RadarAxis> = risks
        .iter()
        .map(|risk| RadarAxis {
            label: risk.display_label().unwrap_or(UNNAMED_RISK).to_string(),
            likelihood: risk.likelihood.unwrap_or(0),
            impact: risk.impact.unwrap_or(0),
        })
        .collect();

    let axis_max = axes
        .iter()
        .map(|axis| axis.likelihood.max(axis.impact))
        .max()
        .map(|peak| peak.saturating_add(RADAR_HEADROOM))
        .unwrap_or(0);

    RiskRadar { axes, axis_max }
}
