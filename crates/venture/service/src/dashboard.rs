//! Dashboard assembly
//!
//! A [`Dashboard`] is everything shown for one report, computed in a single
//! pass over the ingested [`EvaluationReport`]. Building is pure: the same
//! report and options always give an equal dashboard, so late-arriving risks
//! are handled by building again rather than by patching.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use venture_analytics::{
    aggregate, classify, details, market_insights, market_share, radar, rating_bars, recommend,
    Horizon, Projection, ProjectionTotals, RatingBar, RecommendationInput, Recommendations,
    RiskDetail, RiskRadar, RiskSummary, ShareSlice,
};
use venture_types::{
    ActionPlan, BadgeTone, EvaluationReport, Insight, MarketStats, OverallRating, RiskRecord,
    TimelineEntry,
};

/// Inputs to dashboard assembly that are not part of the report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DashboardOptions {
    pub horizon: Horizon,
}

impl DashboardOptions {
    pub fn new(horizon: Horizon) -> Self {
        Self { horizon }
    }
}

/// Headline figures
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryCards {
    /// Economic indicator as a rounded percentage
    pub market_position_pct: i64,
    /// Average competitor rating out of 5, as a rounded percentage
    pub competitive_standing_pct: i64,
    pub competitor_count: usize,
    pub projected_annual_revenue: f64,
    pub rating: OverallRating,
    pub rating_tone: BadgeTone,
    pub explanation: String,
}

/// What the action plan tab shows
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionPlanView {
    Steps {
        steps: Vec<String>,
        timeline: Vec<TimelineEntry>,
    },
    Text {
        text: String,
    },
    /// Rule-derived fallback when the report has no plan
    Recommendations(Recommendations),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dashboard {
    pub summary: SummaryCards,
    pub market: MarketStats,
    pub insights: Vec<Insight>,
    pub rating_bars: Vec<RatingBar>,
    pub market_share: Vec<ShareSlice>,
    pub risks: RiskSummary,
    pub risk_details: Vec<RiskDetail>,
    pub risk_radar: RiskRadar,
    pub horizon: Horizon,
    pub projection: Projection,
    pub projection_totals: ProjectionTotals,
    pub action_plan: ActionPlanView,
}

impl Dashboard {
    pub fn build(report: &EvaluationReport, options: &DashboardOptions) -> Self {
        let market = aggregate(&report.competitors);
        let projection = Projection::from_seed(&report.financial_projection, options.horizon);

        debug!(
            competitors = market.competitor_count,
            risks = report.risks.len(),
            horizon = ?options.horizon,
            source = ?projection.source,
            "Building dashboard"
        );

        Self {
            summary: summary_cards(report, &market),
            insights: market_insights(&market),
            rating_bars: rating_bars(&report.competitors),
            market_share: market_share(&report.competitors),
            risks: classify(&report.risks),
            risk_details: details(&report.risks, &report.mitigation_strategies),
            risk_radar: radar(&report.risks),
            horizon: options.horizon,
            projection_totals: projection.totals(),
            projection,
            action_plan: action_plan_view(report),
            market,
        }
    }

    /// Rebuild against a replacement risk list and its strategies.
    pub fn with_risks(
        report: &EvaluationReport,
        risks: &[RiskRecord],
        strategies: &[String],
        options: &DashboardOptions,
    ) -> Self {
        let mut report = report.clone();
        report.risks = risks.to_vec();
        report.mitigation_strategies = strategies.to_vec();
        Self::build(&report, options)
    }

    /// The part of the dashboard shown on one tab, as JSON
    pub fn section(&self, tab: Tab) -> Result<Value, serde_json::Error> {
        let entries: Vec<(&str, Value)> = match tab {
            Tab::Summary => vec![("summary", serde_json::to_value(&self.summary)?)],
            Tab::Competition => vec![
                ("market", serde_json::to_value(&self.market)?),
                ("rating_bars", serde_json::to_value(&self.rating_bars)?),
                ("market_share", serde_json::to_value(&self.market_share)?),
            ],
            Tab::Financial => vec![
                ("horizon", serde_json::to_value(self.horizon)?),
                ("projection", serde_json::to_value(&self.projection)?),
                ("projection_totals", serde_json::to_value(self.projection_totals)?),
            ],
            Tab::Risks => vec![
                ("risks", serde_json::to_value(&self.risks)?),
                ("risk_details", serde_json::to_value(&self.risk_details)?),
                ("risk_radar", serde_json::to_value(&self.risk_radar)?),
            ],
            Tab::ActionPlan => vec![("action_plan", serde_json::to_value(&self.action_plan)?)],
            Tab::Insights => vec![("insights", serde_json::to_value(&self.insights)?)],
        };

        Ok(Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect::<Map<String, Value>>(),
        ))
    }
}

fn summary_cards(report: &EvaluationReport, market: &MarketStats) -> SummaryCards {
    SummaryCards {
        market_position_pct: percent(report.economic_indicator),
        competitive_standing_pct: percent(market.average_rating / 5.0),
        competitor_count: market.competitor_count,
        projected_annual_revenue: report.financial_projection.revenue.unwrap_or(0.0),
        rating: report.rating.clone(),
        rating_tone: report.rating.tone(),
        explanation: report.explanation.clone(),
    }
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

fn action_plan_view(report: &EvaluationReport) -> ActionPlanView {
    match &report.action_plan {
        ActionPlan::Steps { steps, timeline } if !steps.is_empty() => ActionPlanView::Steps {
            steps: steps.clone(),
            timeline: timeline.clone(),
        },
        ActionPlan::Text { text } if !text.trim().is_empty() => ActionPlanView::Text {
            text: text.clone(),
        },
        _ => ActionPlanView::Recommendations(recommend(&RecommendationInput::from_report(report))),
    }
}

/// Dashboard tabs, in display order
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Summary,
    Competition,
    Financial,
    Risks,
    ActionPlan,
    Insights,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Summary,
        Tab::Competition,
        Tab::Financial,
        Tab::Risks,
        Tab::ActionPlan,
        Tab::Insights,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Summary => "summary",
            Tab::Competition => "competition",
            Tab::Financial => "financial",
            Tab::Risks => "risks",
            Tab::ActionPlan => "action-plan",
            Tab::Insights => "insights",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Tab::ALL.iter().map(Tab::as_str).collect();
                format!("unknown tab '{}', expected one of: {}", s, known.join(", "))
            })
    }
}
