//! CLI error types

use thiserror::Error;
use venture_client::ClientError;
use venture_service::ServiceError;
use venture_types::ReportError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Client(#[from] ClientError),

    /// Report file could not be read as JSON
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Invalid input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
