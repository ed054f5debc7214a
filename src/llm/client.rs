//! Client for the remote generation endpoint.
//!
//! The orchestrator talks to the endpoint through the `GenerationBackend`
//! trait; `RemoteGenClient` is the production implementation over reqwest.
//! The response body is returned as opaque text — parsing and validation
//! are the classifier's concern, not the client's.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

use super::prompt;

/// Token-count ceiling sent with every request.
pub const MAX_TOKENS: u32 = 16_384;

/// Sampling temperature sent with every request.
pub const TEMPERATURE: f64 = 0.9;

/// A message in the generation prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender ("system" or "user").
    pub role: String,
    /// Content of the message.
    pub content: String,
}

impl Message {
    /// Create a new system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a new user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Trait for backends that can generate records for a chunk.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generates raw response text for one chunk's content.
    async fn generate(&self, chunk_text: &str) -> Result<String, GenerationError>;
}

/// Wire body for the remote predict endpoint.
#[derive(Debug, Serialize)]
struct PredictRequest {
    prompt: Vec<Message>,
    stream: bool,
    max_tokens: u32,
    temperature: f64,
}

/// Client for the remote generation endpoint.
pub struct RemoteGenClient {
    /// Endpoint URL for predict calls.
    endpoint: String,
    /// API key sent in the Authorization header.
    api_key: String,
    /// Timeout applied to each call.
    timeout: Duration,
    /// HTTP client for making API requests.
    http_client: Client,
}

impl RemoteGenClient {
    /// Create a new client with an explicit per-call timeout.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - URL of the remote predict endpoint
    /// * `api_key` - Credential sent as `Authorization: Api-Key {key}`
    /// * `timeout` - Upper bound on a single call; expiry surfaces as
    ///   `GenerationError::TimedOut` rather than blocking the run
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            timeout,
            http_client: Client::builder()
                .timeout(timeout)
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationBackend for RemoteGenClient {
    async fn generate(&self, chunk_text: &str) -> Result<String, GenerationError> {
        let body = PredictRequest {
            prompt: prompt::build_messages(chunk_text),
            stream: false,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Api-Key {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::TimedOut {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    GenerationError::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(GenerationError::Api {
                code: status.as_u16(),
                message,
            });
        }

        response
            .text()
            .await
            .map_err(|e| GenerationError::Request(e.to_string()))
    }
}
