//! Venture Types - evaluation report schema
//!
//! The evaluation service returns an opaque payload. Everything downstream
//! works on the typed [`EvaluationReport`] built once by [`ingest`], where all
//! missing or malformed fields are coerced to documented defaults.

#![deny(unsafe_code)]

pub mod derived;
pub mod error;
pub mod ingest;
pub mod report;

pub use derived::{
    Insight, InsightKind, MarketStats, ProjectionPoint, RiskCategory, RiskCategoryCounts,
};
pub use error::ReportError;
pub use ingest::{parse_generated_risks, string_list};
pub use report::{
    ActionPlan, BadgeTone, CompetitorRecord, EvaluationReport, EvaluationRequest, FinancialSeed,
    GeneratedRisk, OverallRating, RiskRecord, TimelineEntry,
};
