//! Insight rule engine
//!
//! An ordered list of threshold rules over [`MarketStats`]. Rules fire
//! independently and insights come out in declaration order, which is the
//! order they are displayed in. New rules are appended, never inserted.

use venture_types::{Insight, InsightKind, MarketStats};

/// Average rating above which the market counts as high-quality
pub const HIGH_QUALITY_RATING: f64 = 4.3;
/// Total reviews above which the market counts as established
pub const ESTABLISHED_MARKET_REVIEWS: u64 = 700;

type Predicate = Box<dyn Fn(&MarketStats) -> bool + Send + Sync>;

/// A single threshold rule
pub struct InsightRule {
    name: &'static str,
    kind: InsightKind,
    title: String,
    description: String,
    applies: Predicate,
}

impl InsightRule {
    pub fn new(
        name: &'static str,
        kind: InsightKind,
        title: impl Into<String>,
        description: impl Into<String>,
        applies: impl Fn(&MarketStats) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            kind,
            title: title.into(),
            description: description.into(),
            applies: Box::new(applies),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The insight this rule emits for `stats`, if it fires
    pub fn evaluate(&self, stats: &MarketStats) -> Option<Insight> {
        (self.applies)(stats).then(|| Insight {
            kind: self.kind,
            title: self.title.clone(),
            description: self.description.clone(),
        })
    }

    /// Competitors keep very high standards
    pub fn high_quality_market() -> Self {
        Self::new(
            "high_quality_market",
            InsightKind::Warning,
            "High Quality Market",
            "Competitors maintain very high standards. Focus on premium service offerings.",
            |stats| stats.average_rating > HIGH_QUALITY_RATING,
        )
    }

    /// Large existing customer base
    pub fn established_market() -> Self {
        Self::new(
            "established_market",
            InsightKind::Info,
            "Established Market",
            "Strong existing customer base. Focus on differentiation strategy.",
            |stats| stats.total_reviews > ESTABLISHED_MARKET_REVIEWS,
        )
    }
}

impl std::fmt::Debug for InsightRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightRule")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("title", &self.title)
            .finish()
    }
}

/// Ordered rule set
#[derive(Debug, Default)]
pub struct InsightEngine {
    rules: Vec<InsightRule>,
}

impl InsightEngine {
    /// Engine with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard market rules, in display order
    pub fn standard() -> Self {
        Self::new()
            .with_rule(InsightRule::high_quality_market())
            .with_rule(InsightRule::established_market())
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: InsightRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(InsightRule::name).collect()
    }

    pub fn evaluate(&self, stats: &MarketStats) -> Vec<Insight> {
        self.rules
            .iter()
            .filter_map(|rule| rule.evaluate(stats))
            .collect()
    }
}

/// Run the standard rules
pub fn market_insights(stats: &MarketStats) -> Vec<Insight> {
    InsightEngine::standard().evaluate(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(average_rating: f64, total_reviews: u64) -> MarketStats {
        MarketStats {
            average_rating,
            total_reviews,
            ..MarketStats::default()
        }
    }

    #[test]
    fn test_both_rules_fire_in_order() {
        let insights = market_insights(&stats(4.5, 800));
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].kind, InsightKind::Warning);
        assert_eq!(insights[0].title, "High Quality Market");
        assert_eq!(insights[1].kind, InsightKind::Info);
        assert_eq!(insights[1].title, "Established Market");
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(market_insights(&stats(4.3, 700)).is_empty());
        assert_eq!(market_insights(&stats(4.31, 0)).len(), 1);
        assert_eq!(market_insights(&stats(0.0, 701))[0].kind, InsightKind::Info);
    }

    #[test]
    fn test_empty_market_has_no_insights() {
        assert!(market_insights(&MarketStats::default()).is_empty());
    }

    #[test]
    fn test_appended_rule_runs_last() {
        let engine = InsightEngine::standard().with_rule(InsightRule::new(
            "crowded",
            InsightKind::Warning,
            "Crowded Market",
            "Many direct competitors nearby.",
            |stats| stats.competitor_count > 3,
        ));
        let mut market = stats(4.6, 900);
        market.competitor_count = 5;

        let titles: Vec<String> = engine
            .evaluate(&market)
            .into_iter()
            .map(|insight| insight.title)
            .collect();
        assert_eq!(
            titles,
            vec!["High Quality Market", "Established Market", "Crowded Market"]
        );
        assert_eq!(
            engine.rule_names(),
            vec!["high_quality_market", "established_market", "crowded"]
        );
    }
}
