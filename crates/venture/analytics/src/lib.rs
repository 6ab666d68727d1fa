//! Venture Analytics - the evaluation analytics core
//!
//! Pure derivations over an [`EvaluationReport`](venture_types::EvaluationReport):
//! - [`competitors`]: market statistics and competitor chart series
//! - [`risks`]: severity buckets and risk chart series
//! - [`projection`]: monthly revenue/expense/profit projection
//! - [`insights`]: threshold rules over market statistics
//! - [`recommendations`]: fallback action plan rules
//!
//! Nothing here holds state or performs I/O. Identical inputs always give
//! identical outputs.

#![deny(unsafe_code)]

pub mod competitors;
pub mod insights;
pub mod labels;
pub mod projection;
pub mod recommendations;
pub mod risks;

pub use competitors::{aggregate, market_share, rating_bars, RatingBar, ShareSlice};
pub use insights::{market_insights, InsightEngine, InsightRule};
pub use labels::{truncate_label, truncate_labels, ChartLabel};
pub use projection::{
    project, Horizon, Projection, ProjectionModel, ProjectionSource, ProjectionTotals,
};
pub use recommendations::{recommend, RecommendationInput, Recommendations, ON_TRACK_MESSAGE};
pub use risks::{
    classify, details, radar, RadarAxis, RiskBar, RiskDetail, RiskRadar, RiskSummary,
};
