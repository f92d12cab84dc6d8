//! OpenAI Chat Completions API integration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, TextClient};
use crate::error::{ProviderError, Result};

// ---------------------------------------------------------------------------
// Chat Completions request types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    pub model: String,
    pub messages: Vec<OpenAIMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Serialize)]
pub struct OpenAIMessage {
    pub role: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Chat Completions response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    pub choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    pub message: OpenAIResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIErrorBody {
    pub error: OpenAIErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct OpenAIErrorDetail {
    pub message: String,
}

// ---------------------------------------------------------------------------
// OpenAIClient
// ---------------------------------------------------------------------------

/// Platform and project keys both start with `sk-`; anything else fails
/// before the outbound call is made.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.starts_with("sk-") {
        return Err(ProviderError::InvalidApiKey(
            "Invalid OpenAI API key format. Please check your API key.".into(),
        ));
    }
    Ok(())
}

pub struct OpenAIClient {
    api_key: String,
    model_id: String,
    client: reqwest::Client,
}

impl OpenAIClient {
    pub fn new(api_key: String, model_id: String) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            model_id,
            client: reqwest::Client::new(),
        }
    }

    pub fn build_request(&self, prompt: &str) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model_id.clone(),
            messages: vec![OpenAIMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

#[async_trait]
impl TextClient for OpenAIClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        validate_api_key(&self.api_key)?;

        let response = self
            .client
            .post("https://api.openai.com/v1/chat/completions")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read response body".into());
            let message = serde_json::from_str::<OpenAIErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| ProviderError::InvalidResponse("no message content".into()))
    }

    fn model_name(&self) -> &str {
        &self.model_id
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
