//! Client error types

use thiserror::Error;
use venture_types::ReportError;

/// Errors raised while talking to the evaluation service or the risk advisor
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable body
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the remote side
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message shown to the user
        message: String,
    },

    /// Successful status with a body that cannot be used
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credential environment variable is unset or blank
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
