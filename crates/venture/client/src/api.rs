//! HTTP client for the evaluation service

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};
use venture_types::{string_list, EvaluationReport, EvaluationRequest};

/// Default service address
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Shown when a failed response carries no `detail`
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// The remote evaluation service.
///
/// Implementations return already-ingested values: lookup lists hold only
/// strings and reports have every field coerced.
#[async_trait]
pub trait EvaluationApi: Send + Sync {
    /// Known locations
    async fn locations(&self) -> ClientResult<Vec<String>>;

    /// Suggested business ideas
    async fn business_ideas(&self) -> ClientResult<Vec<String>>;

    /// Evaluate an idea at a location
    async fn evaluate(&self, request: &EvaluationRequest) -> ClientResult<EvaluationReport>;
}

/// reqwest-backed [`EvaluationApi`]
#[derive(Debug, Clone)]
pub struct HttpEvaluationClient {
    client: Client,
    base_url: String,
}

impl HttpEvaluationClient {
    /// Create a client with the default timeout
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::with_timeout(base_url, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");
        let response = self.client.get(&url).send().await?;
        handle_response(response).await
    }

    async fn post<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");
        let response = self.client.post(&url).json(body).send().await?;
        handle_response(response).await
    }
}

#[async_trait]
impl EvaluationApi for HttpEvaluationClient {
    async fn locations(&self) -> ClientResult<Vec<String>> {
        Ok(string_list(&self.get("/locations").await?))
    }

    async fn business_ideas(&self) -> ClientResult<Vec<String>> {
        Ok(string_list(&self.get("/business-ideas").await?))
    }

    async fn evaluate(&self, request: &EvaluationRequest) -> ClientResult<EvaluationReport> {
        let body = self.post("/evaluate", request).await?;
        let report = EvaluationReport::from_value(&body);
        info!(
            idea = %request.business_idea,
            location = %request.location,
            competitors = report.competitors.len(),
            risks = report.risks.len(),
            "evaluation received"
        );
        Ok(report)
    }
}

async fn handle_response(response: reqwest::Response) -> ClientResult<Value> {
    let status = response.status();

    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// The `detail` field of an error body, or the generic message.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| match value.get("detail") {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
            _ => None,
        })
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}
