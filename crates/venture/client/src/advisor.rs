//! Risk advisor backed by an OpenAI-style chat completion endpoint.

use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};
use venture_types::{parse_generated_risks, GeneratedRisk};

pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_RISK_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
/// Environment variable holding the API key
pub const AUTH_ENV_VAR: &str = "OPENAI_API_KEY";

const ADVISOR_TIMEOUT_SECS: u64 = 60;

/// Produces risks for an idea when the report carries none worth showing
#[async_trait]
pub trait RiskAdvisor: Send + Sync {
    async fn generate_risks(
        &self,
        business_idea: &str,
        location: &str,
    ) -> ClientResult<Vec<GeneratedRisk>>;
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Value,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// [`RiskAdvisor`] that asks a chat model for a JSON risk list
#[derive(Debug, Clone)]
pub struct ChatCompletionRiskAdvisor {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl ChatCompletionRiskAdvisor {
    pub fn new(api_key: impl Into<String>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(ADVISOR_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            endpoint: DEFAULT_CHAT_ENDPOINT.to_string(),
            model: DEFAULT_RISK_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            api_key: api_key.into(),
        })
    }

    /// Read the key from [`AUTH_ENV_VAR`]
    pub fn from_env() -> ClientResult<Self> {
        let key = std::env::var(AUTH_ENV_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ClientError::MissingApiKey(AUTH_ENV_VAR.to_string()))?;
        Self::new(key)
    }

    /// Accepts either a full `/chat/completions` URL or an API base.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = resolve_chat_endpoint(endpoint);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl RiskAdvisor for ChatCompletionRiskAdvisor {
    async fn generate_risks(
        &self,
        business_idea: &str,
        location: &str,
    ) -> ClientResult<Vec<GeneratedRisk>> {
        let payload = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": risk_prompt(business_idea, location) }],
            "temperature": self.temperature,
        });
        debug!(endpoint = %self.endpoint, model = %self.model, "requesting risks");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: truncate(&body, 320),
            });
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .first()
            .map(|choice| extract_text(&choice.message.content))
            .ok_or_else(|| ClientError::InvalidResponse("no choices in completion".into()))?;

        let risks = parse_generated_risks(&content)?;
        info!(count = risks.len(), "risks generated");
        Ok(risks)
    }
}

/// The instruction sent to the model.
pub fn risk_prompt(business_idea: &str, location: &str) -> String {
    format!(
        "Analyze this business: \"{business_idea}\" in {location}. \
Return ONLY a JSON array of 3-5 business risks in this exact format:\n\
[\n  {{\n    \"risk\": \"risk name\",\n    \"likelihood\": <number 1-5>,\n    \
\"impact\": <number 1-5>,\n    \"risk_score\": <likelihood times impact>,\n    \
\"mitigation_strategy\": \"detailed strategy to mitigate this risk\"\n  }}\n]"
    )
}

fn resolve_chat_endpoint(endpoint: &str) -> String {
    if endpoint.contains("/chat/completions") {
        endpoint.to_string()
    } else {
        format!("{}/chat/completions", endpoint.trim_end_matches('/'))
    }
}

fn extract_text(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(parts) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(Value::as_str))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}
