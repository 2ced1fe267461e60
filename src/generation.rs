//! Client for the external text-generation service.
//!
//! The orchestration layer only ever needs one operation: prompt in, text out
//! or error. That narrow seam is expressed as the [`GenerationClient`] trait
//! so tests can substitute a stub without real network calls. The production
//! implementation talks to the Gemini `generateContent` endpoint over HTTP;
//! each call is stateless and non-streaming.

use crate::config::get_config;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default per-call timeout. The upstream API specifies none; an unbounded
/// call could hang a request indefinitely.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors surfaced while calling the generation service.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Service could not be reached (network failure or timeout).
    #[error("Generation service unavailable: {0}")]
    ProviderUnavailable(String),
    /// Service returned an error response (auth, quota, rate limit).
    #[error("Failed to generate response: {0}")]
    GenerationFailed(String),
    /// Service response could not be parsed or contained no text.
    #[error("Malformed generation response: {0}")]
    InvalidResponse(String),
}

/// Interface implemented by text-generation backends.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Submit a single prompt and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini-backed generation client.
pub struct GeminiClient {
    http: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Construct a client against an explicit endpoint, used directly by
    /// tests and by [`GeminiClient::from_config`] in production.
    pub fn new(base_url: String, model: String, api_key: String, timeout: Duration) -> Self {
        let http = Client::builder()
            .user_agent("legalens/generation")
            .timeout(timeout)
            .build()
            .expect("Failed to construct reqwest::Client for generation");
        Self {
            http,
            base_url,
            model,
            api_key,
        }
    }

    /// Build a client from the loaded configuration.
    pub fn from_config() -> Self {
        let config = get_config();
        let base_url = config
            .gemini_base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = Duration::from_secs(
            config
                .generation_timeout_secs
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        );
        Self::new(
            base_url,
            config.gemini_model.clone(),
            config.gemini_api_key.clone(),
            timeout,
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let payload = json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|error| {
                GenerationError::ProviderUnavailable(format!(
                    "failed to reach Gemini at {}: {error}",
                    self.base_url
                ))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::GenerationFailed(format!(
                "Gemini returned {status}: {body}"
            )));
        }

        let body: GenerateResponse = response.json().await.map_err(|error| {
            GenerationError::InvalidResponse(format!("failed to decode Gemini response: {error}"))
        })?;

        let text: String = body
            .candidates
            .first()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GenerationError::InvalidResponse(
                "Gemini response contained no text candidates".into(),
            ));
        }

        Ok(text.trim().to_string())
    }
}
