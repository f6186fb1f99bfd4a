//! Text-generation client
//!
//! Client for an OpenAI-compatible chat completions API.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::NarrativeConfig;
use crate::error::AppError;

/// Text-generation failures
#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response contained no completion")]
    EmptyCompletion,
}

impl From<NarrativeError> for AppError {
    fn from(err: NarrativeError) -> Self {
        AppError::NarrativeServiceError(err.to_string())
    }
}

/// Client for the text-generation service
#[derive(Clone)]
pub struct NarrativeClient {
    http_client: Client,
    api_endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
}

/// A single chat message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
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

/// Chat completion request body
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl NarrativeClient {
    /// Create a new client from configuration
    pub fn new(config: &NarrativeConfig) -> Result<Self, NarrativeError> {
        let http_client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http_client,
            api_endpoint: config.api_endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// Build the request body for a system and user prompt
    pub fn request(&self, system: &str, user: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Send a chat completion and return the generated text verbatim
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, NarrativeError> {
        let url = format!("{}/chat/completions", self.api_endpoint);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request(system, user))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(NarrativeError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let result: ChatCompletionResponse = serde_json::from_slice(&bytes)?;

        result
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(NarrativeError::EmptyCompletion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let client = NarrativeClient::new(&NarrativeConfig::default()).unwrap();
        let body = serde_json::to_value(client.request("sys", "usr")).unwrap();

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "sys");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "usr");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = NarrativeConfig {
            api_endpoint: "http://localhost:9999/v1/".to_string(),
            ..NarrativeConfig::default()
        };
        let client = NarrativeClient::new(&config).unwrap();
        assert_eq!(client.api_endpoint, "http://localhost:9999/v1");
    }
}
