//! Venture Client - remote collaborators of the analytics core
//!
//! - [`EvaluationApi`]: locations, business ideas and evaluations
//! - [`RiskAdvisor`]: model-generated risks with mitigation strategies
//!
//! Both are traits so the service can run against in-memory fakes.

#![deny(unsafe_code)]

pub mod advisor;
pub mod api;
pub mod error;

pub use advisor::{ChatCompletionRiskAdvisor, RiskAdvisor, AUTH_ENV_VAR, DEFAULT_RISK_MODEL};
pub use api::{EvaluationApi, HttpEvaluationClient, DEFAULT_API_URL, DEFAULT_ERROR_MESSAGE};
pub use error::{ClientError, ClientResult};
