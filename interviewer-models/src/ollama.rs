//! Ollama chat client.
//!
//! Talks to a local or remote Ollama instance over its `/api/chat` endpoint.
//!
//! # Example
//!
//! ```ignore
//! use interviewer_models::OllamaClient;
//!
//! let client = OllamaClient::new("llama3.1");  // Uses localhost:11434
//! let client = OllamaClient::with_base_url("http://192.168.1.100:11434", "mistral");
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default Ollama API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3.1";

// ────────────────────────────────────────────────────────────────────────────
// Ollama API Types
// ────────────────────────────────────────────────────────────────────────────

/// Message in an Ollama chat request/response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OllamaChatMessage {
    pub role: String,
    pub content: String,
}

impl OllamaChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Request body for Ollama's `/api/chat` endpoint.
#[derive(Debug, Serialize)]
pub struct OllamaChatRequest {
    pub model: String,
    pub messages: Vec<OllamaChatMessage>,
    pub stream: bool,
    /// Ask Ollama to constrain output to JSON
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OllamaChatOptions>,
}

/// Chat options for Ollama.
#[derive(Debug, Serialize)]
pub struct OllamaChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from Ollama's `/api/chat` endpoint.
#[derive(Debug, Deserialize)]
pub struct OllamaChatResponse {
    pub model: String,
    pub message: OllamaChatMessage,
    pub done: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// OllamaClient
// ────────────────────────────────────────────────────────────────────────────

/// Minimal non-streaming Ollama chat client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    temperature: Option<f32>,
    client: reqwest::Client,
}

impl OllamaClient {
    /// Create a client for `model` on the default URL (localhost:11434).
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, model)
    }

    /// Create a client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            temperature: None,
            client: reqwest::Client::new(),
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Build the request body for a JSON-mode chat.
    pub fn build_request(&self, messages: Vec<OllamaChatMessage>) -> OllamaChatRequest {
        OllamaChatRequest {
            model: self.model.clone(),
            messages,
            stream: false,
            format: Some("json".to_string()),
            options: self
                .temperature
                .map(|temperature| OllamaChatOptions {
                    temperature: Some(temperature),
                }),
        }
    }

    /// Send a chat and return the assistant's reply text.
    pub async fn chat(&self, messages: Vec<OllamaChatMessage>) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        let request = self.build_request(messages);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::ProviderApi(format!(
                "Ollama API returned {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Request(e.to_string()))?;
        parse_chat_response(&body)
    }
}

/// Extract the assistant text from a `/api/chat` response body.
fn parse_chat_response(body: &str) -> Result<String> {
    let reply: OllamaChatResponse = serde_json::from_str(body)
        .map_err(|e| Error::InvalidReply(format!("malformed chat response: {}", e)))?;

    tracing::trace!(model = %reply.model, done = reply.done, "Ollama reply received");
    Ok(reply.message.content)
}
