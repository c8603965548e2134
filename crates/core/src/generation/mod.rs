//! Metadata generation contract.
//!
//! The transform engine only sees the [`MetadataGenerator`] trait; the
//! OpenAI backed implementation lives in [`openai`].

pub mod openai;
pub mod prompt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use openai::OpenAiGenerator;

/// Generated values for the description and keywords meta tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataResult {
    pub description: String,
    pub keywords: String,
}

/// Errors raised by a metadata generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("the environment variable {0} is not set")]
    MissingCredential(String),

    #[error("request to the generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("generation service rate limited the request: {0}")]
    RateLimited(String),

    #[error("generation service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed model output: {0}")]
    MalformedResponse(String),
}

/// Produces head metadata from a document body.
pub trait MetadataGenerator {
    /// Generate a description and keyword list for `body`.
    fn generate(
        &self,
        body: &str,
        model: &str,
        temperature: f64,
    ) -> Result<MetadataResult, GenerationError>;
}

impl<G: MetadataGenerator + ?Sized> MetadataGenerator for &G {
    fn generate(
        &self,
        body: &str,
        model: &str,
        temperature: f64,
    ) -> Result<MetadataResult, GenerationError> {
        (**self).generate(body, model, temperature)
    }
}

/// Decode model output into a [`MetadataResult`].
///
/// Accepts the bare JSON object, optionally wrapped in a ```json fence.
/// Any other shape, or an empty field, is rejected.
pub fn decode_metadata(content: &str) -> Result<MetadataResult, GenerationError> {
    let trimmed = content.trim();
    let json = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    let result: MetadataResult = serde_json::from_str(json).map_err(|e| {
        GenerationError::MalformedResponse(format!(
            "expected an object with description and keywords: {e}"
        ))
    })?;

    if result.description.trim().is_empty() {
        return Err(GenerationError::MalformedResponse("empty description".to_string()));
    }
    if result.keywords.trim().is_empty() {
        return Err(GenerationError::MalformedResponse("empty keywords".to_string()));
    }
    Ok(result)
}
