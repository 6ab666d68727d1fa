//! Recommendation rules, used as the action plan when the report has no steps

use serde::Serialize;
use venture_types::EvaluationReport;

/// More competitors than this calls for differentiation
pub const CROWDED_MARKET_COMPETITORS: usize = 5;

/// Shown in place of recommendations when no rule fires
pub const ON_TRACK_MESSAGE: &str =
    "Your business idea is on a strong path! Keep up the great work.";

/// What the recommendation rules look at
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RecommendationInput {
    pub net_profit: Option<f64>,
    pub risk_count: usize,
    pub competitor_count: usize,
}

impl RecommendationInput {
    pub fn from_report(report: &EvaluationReport) -> Self {
        Self {
            net_profit: report.financial_projection.net_profit,
            risk_count: report.risks.len(),
            competitor_count: report.competitors.len(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Recommendations {
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
}

impl Recommendations {
    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    fn push(&mut self, recommendation: &str, next_steps: [&str; 2]) {
        self.recommendations.push(recommendation.to_string());
        self.next_steps
            .extend(next_steps.iter().map(|step| step.to_string()));
    }
}

/// Apply the rules in order: profitability, risks, competition.
pub fn recommend(input: &RecommendationInput) -> Recommendations {
    let mut out = Recommendations::default();

    if input.net_profit.is_some_and(|profit| profit < 0.0) {
        out.push(
            "Revise your pricing strategy to improve profitability.",
            [
                "Analyze your pricing model and compare it with industry standards.",
                "Consider offering discounts or value-added services.",
            ],
        );
    }

    if input.risk_count > 0 {
        out.push(
            "Implement strategies to mitigate identified risks.",
            [
                "Develop a comprehensive risk management plan.",
                "Allocate resources to address high-impact risks.",
            ],
        );
    }

    if input.competitor_count > CROWDED_MARKET_COMPETITORS {
        out.push(
            "Differentiate your business to stand out in a competitive market.",
            [
                "Identify unique value propositions that set your business apart.",
                "Enhance your marketing strategy to highlight your strengths.",
            ],
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rules_fire() {
        let out = recommend(&RecommendationInput {
            net_profit: Some(10.0),
            risk_count: 0,
            competitor_count: 5,
        });
        assert!(out.is_empty());
        assert!(out.next_steps.is_empty());
    }

    #[test]
    fn test_all_rules_fire_in_order() {
        let out = recommend(&RecommendationInput {
            net_profit: Some(-1.0),
            risk_count: 2,
            competitor_count: 6,
        });
        assert_eq!(out.recommendations.len(), 3);
        assert!(out.recommendations[0].starts_with("Revise your pricing"));
        assert!(out.recommendations[1].starts_with("Implement strategies"));
        assert!(out.recommendations[2].starts_with("Differentiate"));
        assert_eq!(out.next_steps.len(), 6);
    }

    #[test]
    fn test_missing_profit_does_not_fire() {
        let out = recommend(&RecommendationInput {
            net_profit: None,
            risk_count: 1,
            competitor_count: 0,
        });
        assert_eq!(out.recommendations.len(), 1);
    }

    #[test]
    fn test_from_report() {
        let report = EvaluationReport::default();
        assert_eq!(
            RecommendationInput::from_report(&report),
            RecommendationInput::default()
        );
    }
}
