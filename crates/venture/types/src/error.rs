//! Error types for report ingestion

use thiserror::Error;

/// Errors raised while turning raw text into a report.
///
/// Field-level problems never surface here; they are coerced during
/// ingestion. Only unparseable input is an error.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Input was not valid JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A payload that must be a list was something else
    #[error("Expected a JSON array of {0}")]
    NotAnArray(String),
}
