//! Service error types

use thiserror::Error;
use venture_client::ClientError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    /// Required request field is blank
    #[error("Invalid request: {0} is required")]
    InvalidRequest(&'static str),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
