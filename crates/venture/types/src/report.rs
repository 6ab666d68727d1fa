//! Typed evaluation report, as received from the evaluation service.

use serde::{Deserialize, Serialize, Serializer};

/// Placeholder rating label when the service sends none
pub const RATING_NOT_AVAILABLE: &str = "N/A";

/// A request for one (business idea, location) evaluation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub business_idea: String,
    pub location: String,
}

impl EvaluationRequest {
    pub fn new(business_idea: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            business_idea: business_idea.into(),
            location: location.into(),
        }
    }
}

/// The evaluation payload for one (business idea, location) pair.
///
/// Built by [`crate::ingest`]; every field already holds its coerced value.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct EvaluationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_idea: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Economic strength, conventionally in [0, 1]
    pub economic_indicator: f64,
    pub financial_projection: FinancialSeed,
    pub competitors: Vec<CompetitorRecord>,
    pub rating: OverallRating,
    pub explanation: String,
    pub risks: Vec<RiskRecord>,
    /// Index-aligned with `risks`
    pub mitigation_strategies: Vec<String>,
    pub action_plan: ActionPlan,
}

/// A nearby competing business
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct CompetitorRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Average customer rating in [0, 5]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<u64>,
    pub vicinity: String,
}

impl CompetitorRecord {
    pub fn new(name: impl Into<String>, rating: f64, user_ratings_total: u64) -> Self {
        Self {
            name: Some(name.into()),
            rating: Some(rating),
            user_ratings_total: Some(user_ratings_total),
            vicinity: String::new(),
        }
    }

    pub fn with_vicinity(mut self, vicinity: impl Into<String>) -> Self {
        self.vicinity = vicinity.into();
        self
    }

    /// Rating used for arithmetic; absent or non-finite counts as 0
    pub fn rating_or_zero(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }

    /// Review count used for arithmetic; absent counts as 0
    pub fn reviews_or_zero(&self) -> u64 {
        self.user_ratings_total.unwrap_or(0)
    }

    /// Trimmed name, `None` when absent or blank
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// A named business risk
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RiskRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<String>,
    /// 1-5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<u8>,
    /// 1-5
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<u8>,
    /// Supplied upstream, conventionally likelihood x impact. Never re-derived.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<i64>,
}

impl RiskRecord {
    pub fn new(risk: impl Into<String>, risk_score: i64) -> Self {
        Self {
            risk: Some(risk.into()),
            likelihood: None,
            impact: None,
            risk_score: Some(risk_score),
        }
    }

    pub fn with_factors(mut self, likelihood: u8, impact: u8) -> Self {
        self.likelihood = Some(likelihood);
        self.impact = Some(impact);
        self
    }

    pub fn score_or_zero(&self) -> i64 {
        self.risk_score.unwrap_or(0)
    }

    /// Trimmed label, `None` when absent or blank
    pub fn display_label(&self) -> Option<&str> {
        self.risk
            .as_deref()
            .map(str::trim)
            .filter(|label| !label.is_empty())
    }
}

/// A risk produced by the remote risk generator, carrying its own mitigation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedRisk {
    #[serde(flatten)]
    pub record: RiskRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation_strategy: Option<String>,
}

/// Seed for the financial projection
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FinancialSeed {
    /// Annual revenue
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_profit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_revenue: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_expenses: Option<Vec<f64>>,
}

impl FinancialSeed {
    pub fn annual(revenue: f64) -> Self {
        Self {
            revenue: Some(revenue),
            ..Self::default()
        }
    }

    /// Explicit monthly series, when both sequences are present, non-empty
    /// and of equal length.
    pub fn explicit_series(&self) -> Option<(&[f64], &[f64])> {
        match (&self.monthly_revenue, &self.monthly_expenses) {
            (Some(revenue), Some(expenses))
                if !revenue.is_empty() && revenue.len() == expenses.len() =>
            {
                Some((revenue.as_slice(), expenses.as_slice()))
            }
            _ => None,
        }
    }
}

/// Overall verdict label
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverallRating {
    Great,
    Good,
    Other(String),
    #[default]
    NotAvailable,
}

/// Badge tone a verdict is shown with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Success,
    Primary,
    Warning,
}

impl OverallRating {
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(RATING_NOT_AVAILABLE) {
            Self::NotAvailable
        } else if label.eq_ignore_ascii_case("great") {
            Self::Great
        } else if label.eq_ignore_ascii_case("good") {
            Self::Good
        } else {
            Self::Other(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Other(label) => label,
            Self::NotAvailable => RATING_NOT_AVAILABLE,
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            Self::Great => BadgeTone::Success,
            Self::Good => BadgeTone::Primary,
            _ => BadgeTone::Warning,
        }
    }
}

impl Serialize for OverallRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl std::fmt::Display for OverallRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Upstream action plan: a step list, free text, or nothing usable
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionPlan {
    Steps {
        steps: Vec<String>,
        timeline: Vec<TimelineEntry>,
    },
    Text {
        text: String,
    },
    #[default]
    None,
}

impl ActionPlan {
    /// Steps, empty unless the plan is a step list
    pub fn steps(&self) -> &[String] {
        match self {
            Self::Steps { steps, .. } => steps,
            _ => &[],
        }
    }
}

/// One milestone of an action plan timeline
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub month: String,
    pub progress: f64,
}
