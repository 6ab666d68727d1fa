//! Property tests for the analytics core.

use proptest::prelude::*;
use venture_analytics::labels::ELLIPSIS;
use venture_analytics::*;
use venture_types::{CompetitorRecord, MarketStats, RiskCategory, RiskRecord};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// A competitor with any combination of missing fields.
fn arb_competitor() -> impl Strategy<Value = CompetitorRecord> {
    (
        prop::option::of("[A-Za-z ]{0,30}"),
        prop::option::of(0.0f64..=5.0),
        prop::option::of(0u64..5_000),
    )
        .prop_map(|(name, rating, user_ratings_total)| CompetitorRecord {
            name,
            rating,
            user_ratings_total,
            vicinity: String::new(),
        })
}

fn arb_competitors(max: usize) -> impl Strategy<Value = Vec<CompetitorRecord>> {
    prop::collection::vec(arb_competitor(), 0..max)
}

fn arb_risk() -> impl Strategy<Value = RiskRecord> {
    (
        prop::option::of("[A-Za-z ]{0,50}"),
        prop::option::of(1u8..=5),
        prop::option::of(1u8..=5),
        prop::option::of(-5i64..40),
    )
        .prop_map(|(risk, likelihood, impact, risk_score)| RiskRecord {
            risk,
            likelihood,
            impact,
            risk_score,
        })
}

fn arb_risks(max: usize) -> impl Strategy<Value = Vec<RiskRecord>> {
    prop::collection::vec(arb_risk(), 0..max)
}

fn arb_horizon() -> impl Strategy<Value = Horizon> {
    prop_oneof![Just(Horizon::Yearly), Just(Horizon::Extended)]
}

// ---------------------------------------------------------------------------
// Competitor Aggregator
// ---------------------------------------------------------------------------

proptest! {
    /// Average rating stays within [0, 5] and is 0 for an empty market.
    #[test]
    fn average_rating_bounded(competitors in arb_competitors(20)) {
        let stats = aggregate(&competitors);
        prop_assert!(stats.average_rating.is_finite());
        prop_assert!((0.0..=5.0).contains(&stats.average_rating));
        if competitors.is_empty() {
            prop_assert_eq!(stats.average_rating, 0.0);
            prop_assert_eq!(stats.top_rating, 0.0);
        }
    }

    /// Total reviews is the plain sum, absent counts as 0.
    #[test]
    fn total_reviews_is_sum(competitors in arb_competitors(20)) {
        let expected: u64 = competitors
            .iter()
            .map(|c| c.user_ratings_total.unwrap_or(0))
            .sum();
        prop_assert_eq!(aggregate(&competitors).total_reviews, expected);
    }

    /// The leader has the maximum review count and is the first record with it.
    #[test]
    fn leader_is_first_maximum(competitors in arb_competitors(20)) {
        let stats = aggregate(&competitors);
        match competitors.iter().map(|c| c.reviews_or_zero()).max() {
            None => prop_assert!(stats.market_leader.is_none()),
            Some(max) => {
                let first = competitors
                    .iter()
                    .find(|c| c.reviews_or_zero() == max)
                    .cloned();
                prop_assert_eq!(stats.market_leader, first);
            }
        }
    }

    /// Two records sharing the maximal count: the earlier one leads.
    #[test]
    fn leader_tie_break(
        prefix in prop::collection::vec(0u64..100, 0..5),
        top in 100u64..1_000,
    ) {
        let mut competitors: Vec<CompetitorRecord> = prefix
            .iter()
            .map(|reviews| CompetitorRecord::new("filler", 3.0, *reviews))
            .collect();
        competitors.push(CompetitorRecord::new("X", 5.0, top));
        competitors.push(CompetitorRecord::new("Y", 3.0, top));

        let leader = aggregate(&competitors).market_leader.unwrap();
        prop_assert_eq!(leader.name.as_deref(), Some("X"));
    }

    #[test]
    fn competitor_count_matches(competitors in arb_competitors(20)) {
        prop_assert_eq!(aggregate(&competitors).competitor_count, competitors.len());
    }
}

// ---------------------------------------------------------------------------
// Risk Classifier
// ---------------------------------------------------------------------------

proptest! {
    /// Every risk lands in exactly one bucket.
    #[test]
    fn buckets_cover_all_risks(risks in arb_risks(20)) {
        let summary = classify(&risks);
        prop_assert_eq!(summary.counts.total(), risks.len());
        prop_assert_eq!(summary.series.len(), risks.len());

        let high = risks.iter().filter(|r| r.score_or_zero() >= 15).count();
        let medium = risks
            .iter()
            .filter(|r| (8..15).contains(&r.score_or_zero()))
            .count();
        prop_assert_eq!(summary.counts.high, high);
        prop_assert_eq!(summary.counts.medium, medium);
    }

    /// The series keeps input order and supplied scores.
    #[test]
    fn series_in_input_order(risks in arb_risks(20)) {
        let summary = classify(&risks);
        for (bar, risk) in summary.series.iter().zip(&risks) {
            prop_assert_eq!(bar.score, risk.score_or_zero());
            prop_assert_eq!(bar.category, RiskCategory::for_score(risk.score_or_zero()));
            prop_assert!(!bar.label.text.trim().is_empty());
        }
    }

    /// Details align one-to-one with risks.
    #[test]
    fn details_align(risks in arb_risks(10), strategies in prop::collection::vec("[a-z ]{0,10}", 0..10)) {
        let details = details(&risks, &strategies);
        prop_assert_eq!(details.len(), risks.len());
        prop_assert!(details.iter().all(|d| !d.mitigation.is_empty()));
    }
}

#[test]
fn bucket_boundaries() {
    assert_eq!(RiskCategory::for_score(15), RiskCategory::High);
    assert_eq!(RiskCategory::for_score(8), RiskCategory::Medium);
    assert_eq!(RiskCategory::for_score(7), RiskCategory::Low);
}

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

proptest! {
    /// Short labels are untouched; long ones are cut to max chars plus ellipsis.
    #[test]
    fn truncation_length(source in "\\PC{0,40}", max in 1usize..30) {
        let (text, truncated) = truncate_label(&source, max);
        let len = source.chars().count();
        if len <= max {
            prop_assert!(!truncated);
            prop_assert_eq!(text, source);
        } else {
            prop_assert!(truncated);
            prop_assert_eq!(text.chars().count(), max + ELLIPSIS.len());
            prop_assert!(text.ends_with(ELLIPSIS));
        }
    }

    /// Different sources never share a final label.
    #[test]
    fn distinct_sources_stay_distinct(
        names in prop::collection::vec("[ab]{1,8}", 0..12),
        max in 1usize..6,
    ) {
        let labels = truncate_labels(names.iter().map(|n| Some(n.as_str())), max, "Unnamed");
        for a in &labels {
            for b in &labels {
                if a.source != b.source {
                    prop_assert_ne!(&a.text, &b.text);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Projection Generator
// ---------------------------------------------------------------------------

proptest! {
    /// Profit is exactly revenue minus expenses; length follows the horizon.
    #[test]
    fn projection_identity(
        revenue in prop::option::of(0.0f64..10_000_000.0),
        horizon in arb_horizon(),
    ) {
        let points = project(revenue, horizon);
        let expected_len = match horizon {
            Horizon::Yearly => 12,
            Horizon::Extended => 24,
        };
        prop_assert_eq!(points.len(), expected_len);
        for (index, point) in points.iter().enumerate() {
            prop_assert_eq!(point.profit, point.revenue - point.expenses);
            prop_assert_eq!(point.month as usize, index + 1);
        }
    }

    /// Month-one revenue is a twelfth of the annual figure.
    #[test]
    fn projection_seed(revenue in 0.0f64..10_000_000.0) {
        let points = project(Some(revenue), Horizon::Yearly);
        prop_assert_eq!(points[0].revenue, revenue / 12.0);
    }
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn components_are_idempotent(
        competitors in arb_competitors(15),
        risks in arb_risks(15),
        revenue in prop::option::of(0.0f64..1_000_000.0),
        horizon in arb_horizon(),
    ) {
        let stats = aggregate(&competitors);
        prop_assert_eq!(&stats, &aggregate(&competitors));
        prop_assert_eq!(classify(&risks), classify(&risks));
        prop_assert_eq!(project(revenue, horizon), project(revenue, horizon));
        prop_assert_eq!(market_insights(&stats), market_insights(&stats));
        prop_assert_eq!(rating_bars(&competitors), rating_bars(&competitors));
    }

    /// Insights depend only on the two thresholds.
    #[test]
    fn insight_rules_independent(average in 0.0f64..5.0, reviews in 0u64..2_000) {
        let stats = MarketStats {
            average_rating: average,
            total_reviews: reviews,
            ..MarketStats::default()
        };
        let expected = usize::from(average > 4.3) + usize::from(reviews > 700);
        prop_assert_eq!(market_insights(&stats).len(), expected);
    }
}
