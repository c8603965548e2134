//! OpenAI chat completions backed metadata generator.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

use super::prompt::{SYSTEM_PROMPT, user_prompt};
use super::{GenerationError, MetadataGenerator, MetadataResult, decode_metadata};
use crate::config::types::GenerationConfig;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Blocking client for the `/chat/completions` endpoint.
///
/// Requests structured output so the reply is a `{description, keywords}`
/// object. No retries are attempted.
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiGenerator {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a generator reading the API key from `cfg.api_key_env`.
    pub fn from_config(cfg: &GenerationConfig) -> Result<Self, GenerationError> {
        let api_key = std::env::var(&cfg.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GenerationError::MissingCredential(cfg.api_key_env.clone()))?;
        Self::new(api_key, cfg.base_url.as_str(), Duration::from_secs(cfg.timeout_secs))
    }

    fn request_body(body: &str, model: &str, temperature: f64) -> serde_json::Value {
        json!({
            "model": model,
            "temperature": temperature,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": user_prompt(body) },
            ],
            "response_format": {
                "type": "json_schema",
                "json_schema": {
                    "name": "article_metadata",
                    "strict": true,
                    "schema": {
                        "type": "object",
                        "properties": {
                            "description": { "type": "string" },
                            "keywords": { "type": "string" },
                        },
                        "required": ["description", "keywords"],
                        "additionalProperties": false,
                    },
                },
            },
        })
    }
}

impl MetadataGenerator for OpenAiGenerator {
    fn generate(
        &self,
        body: &str,
        model: &str,
        temperature: f64,
    ) -> Result<MetadataResult, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url);
        info!(model, temperature, body_len = body.len(), "requesting head metadata");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&Self::request_body(body, model, temperature))
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            let message = api_error_message(&text);
            return Err(if status == StatusCode::TOO_MANY_REQUESTS {
                GenerationError::RateLimited(message)
            } else {
                GenerationError::Api { status: status.as_u16(), message }
            });
        }

        let completion: ChatCompletion = response.json().map_err(|e| {
            GenerationError::MalformedResponse(format!("unexpected response body: {e}"))
        })?;
        let message = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::MalformedResponse("no choices in response".to_string()))?
            .message;

        if let Some(refusal) = message.refusal {
            return Err(GenerationError::MalformedResponse(format!("model refused: {refusal}")));
        }
        let content = message
            .content
            .ok_or_else(|| GenerationError::MalformedResponse("empty message content".to_string()))?;
        debug!(content_len = content.len(), "received completion");
        decode_metadata(&content)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Pull `error.message` out of an API error body, falling back to the raw text.
fn api_error_message(text: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(text) {
        Ok(body) => body.error.message,
        Err(_) if text.trim().is_empty() => "no error details".to_string(),
        Err(_) => text.trim().to_string(),
    }
}
