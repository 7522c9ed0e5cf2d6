//! # External Model Client
//!
//! This module wraps the gateway's sole outbound dependency: Google's Gemini `generateContent`
//! endpoint. A prompt goes in verbatim; the model's raw text comes back. Generation runs with a
//! fixed output budget and a low temperature so grading stays consistent across requests, and
//! thinking is disabled to keep latency down.
//!
//! ## Environment
//!
//! Credentials and tuning come from `util::config`: `GEMINI_API_KEY`, `MODEL_NAME`,
//! `MODEL_MAX_OUTPUT_TOKENS`, `MODEL_TEMPERATURE`, `MODEL_TIMEOUT_SECONDS`.
//!
//! The client is stateless across requests and cheap to clone; one instance lives in
//! [`crate::state::AppState`] and is shared by all handlers.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Production endpoint prefix for the Gemini API.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Errors raised while calling the external model.
///
/// These stay inside the gateway: handlers log them and answer the client with
/// an opaque server error.
#[derive(Debug)]
pub enum ModelError {
    /// The request never completed or came back with a failure status.
    Request(String),
    /// The reply decoded, but carried no usable text.
    MalformedReply(String),
}

/// Request body for the Gemini API.
#[derive(Serialize)]
struct GeminiRequest {
    /// The content to send to the model.
    contents: Vec<Content>,
    /// Generation configuration: output budget, temperature, thinking.
    generation_config: GenerationConfig,
}

/// Content wrapper for the Gemini API request.
#[derive(Serialize)]
struct Content {
    /// The parts of the message (e.g., prompt text).
    parts: Vec<Part>,
}

/// A single part of the content, typically a text prompt.
#[derive(Serialize)]
struct Part {
    /// The text content to send to the model.
    text: String,
}

/// Configuration for the model's generation process.
#[derive(Serialize)]
struct GenerationConfig {
    /// Hard cap on generated output length.
    max_output_tokens: u32,
    /// Sampling temperature; kept low for consistent grading.
    temperature: f32,
    /// Configuration for the model's thinking process.
    thinking_config: ThinkingConfig,
}

/// Configuration for the model's thinking process.
#[derive(Serialize)]
struct ThinkingConfig {
    /// The thinking budget (set to 0 to disable thinking for faster requests).
    thinking_budget: u32,
}

/// Response from the Gemini API.
#[derive(Deserialize)]
struct GeminiResponse {
    /// List of candidate completions from the model.
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// A single candidate response from the Gemini API.
#[derive(Deserialize)]
struct Candidate {
    /// The content of the candidate response.
    content: ContentResponse,
}

/// Content of a candidate response.
#[derive(Deserialize)]
struct ContentResponse {
    /// The parts of the response (e.g., generated grading text).
    #[serde(default)]
    parts: Vec<PartResponse>,
}

/// A single part of the response content.
#[derive(Deserialize)]
struct PartResponse {
    /// The generated text from the model.
    text: String,
}

/// Client for the external instruction-following model.
#[derive(Clone)]
pub struct ModelClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model_name: String,
    max_output_tokens: u32,
    temperature: f32,
}

impl ModelClient {
    /// Creates a client with explicit settings. The `base_url` parameter exists
    /// so tests can point the client at a local stub.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model_name: impl Into<String>,
        max_output_tokens: u32,
        temperature: f32,
        timeout: Duration,
    ) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            model_name: model_name.into(),
            max_output_tokens,
            temperature,
        }
    }

    /// Creates a client against the production Gemini endpoint, configured from
    /// the environment.
    pub fn from_config() -> Self {
        Self::new(
            GEMINI_BASE_URL,
            util::config::gemini_api_key(),
            util::config::model_name(),
            util::config::model_max_output_tokens(),
            util::config::model_temperature(),
            Duration::from_secs(util::config::model_timeout_seconds()),
        )
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, self.api_key
        )
    }

    /// Sends `prompt` to the model and returns its raw text output.
    ///
    /// The first text part of the first candidate is the reply; anything else
    /// is a [`ModelError::MalformedReply`].
    pub async fn generate(&self, prompt: &str) -> Result<String, ModelError> {
        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                max_output_tokens: self.max_output_tokens,
                temperature: self.temperature,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let response = self
            .http
            .post(self.endpoint())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ModelError::Request(format!(
                "model endpoint returned {}",
                response.status()
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ModelError::Request(e.to_string()))?;
        let reply = serde_json::from_str::<GeminiResponse>(&response_text)
            .map_err(|e| ModelError::MalformedReply(format!("error decoding reply: {e}")))?;

        reply
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| ModelError::MalformedReply("reply carried no candidates".to_string()))
    }
}
