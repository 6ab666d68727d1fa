//! Competitor aggregation

use serde::Serialize;
use venture_types::{CompetitorRecord, MarketStats};

use crate::labels::{truncate_labels, ChartLabel};

/// Label length on the rating bar chart
pub const RATING_LABEL_MAX_CHARS: usize = 20;
/// Label length on the market share chart
pub const SHARE_LABEL_MAX_CHARS: usize = 15;
/// Label for a competitor without a usable name
pub const UNNAMED_COMPETITOR: &str = "Unnamed";
/// Ratings at or above this are highlighted
pub const STANDOUT_RATING: f64 = 4.5;

/// Reduce a competitor list to market statistics.
///
/// Missing ratings and review counts count as 0. The market leader is the
/// record with the strictly greatest review count; on a tie the earlier
/// record keeps the title. An empty list gives all-zero statistics.
pub fn aggregate(competitors: &[CompetitorRecord]) -> MarketStats {
    let competitor_count = competitors.len();
    if competitor_count == 0 {
        return MarketStats::default();
    }

    let rating_sum: f64 = competitors.iter().map(CompetitorRecord::rating_or_zero).sum();
    let total_reviews = competitors
        .iter()
        .map(CompetitorRecord::reviews_or_zero)
        .fold(0u64, u64::saturating_add);
    let top_rating = competitors
        .iter()
        .map(CompetitorRecord::rating_or_zero)
        .fold(f64::NEG_INFINITY, f64::max);

    let market_leader = competitors
        .iter()
        .fold(None::<&CompetitorRecord>, |leader, current| match leader {
            Some(leader) if current.reviews_or_zero() <= leader.reviews_or_zero() => Some(leader),
            _ => Some(current),
        })
        .cloned();

    MarketStats {
        average_rating: rating_sum / competitor_count as f64,
        total_reviews,
        top_rating,
        market_leader,
        competitor_count,
    }
}

/// One bar of the competitor rating chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatingBar {
    pub label: ChartLabel,
    pub rating: f64,
    pub reviews: u64,
    /// Rating at or above [`STANDOUT_RATING`]
    pub standout: bool,
}

/// Rating chart series, highest rating first. Equal ratings keep input order.
pub fn rating_bars(competitors: &[CompetitorRecord]) -> Vec<RatingBar> {
    let labels = truncate_labels(
        competitors.iter().map(CompetitorRecord::display_name),
        RATING_LABEL_MAX_CHARS,
        UNNAMED_COMPETITOR,
    );

    let mut bars: Vec<RatingBar> = competitors
        .iter()
        .zip(labels)
        .map(|(competitor, label)| {
            let rating = competitor.rating_or_zero();
            RatingBar {
                label,
                rating,
                reviews: competitor.reviews_or_zero(),
                standout: rating >= STANDOUT_RATING,
            }
        })
        .collect();

    bars.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    bars
}

/// One slice of the market share chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ShareSlice {
    pub label: ChartLabel,
    /// Review count, used as a proxy for customer share
    pub value: u64,
}

/// Market share series in input order
pub fn market_share(competitors: &[CompetitorRecord]) -> Vec<ShareSlice> {
    let labels = truncate_labels(
        competitors.iter().map(CompetitorRecord::display_name),
        SHARE_LABEL_MAX_CHARS,
        UNNAMED_COMPETITOR,
    );

    competitors
        .iter()
        .zip(labels)
        .map(|(competitor, label)| ShareSlice {
            label,
            value: competitor.reviews_or_zero(),
        })
        .collect()
}
