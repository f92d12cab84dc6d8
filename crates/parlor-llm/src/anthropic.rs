//! Anthropic Messages API integration.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_MAX_TOKENS, TextClient};
use crate::error::{ProviderError, Result};

pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// ---------------------------------------------------------------------------
// Messages API request types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AnthropicRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<AnthropicMessage>,
}

#[derive(Debug, Serialize)]
pub struct AnthropicMessage {
    pub role: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Messages API response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct AnthropicResponse {
    pub content: Vec<AnthropicContentBlock>,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicContentBlock {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicErrorBody {
    pub error: AnthropicErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct AnthropicErrorDetail {
    pub message: String,
}

// ---------------------------------------------------------------------------
// AnthropicClient
// ---------------------------------------------------------------------------

pub struct AnthropicClient {
    api_key: String,
    model_id: String,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(api_key: String, model_id: String) -> Self {
        Self {
            api_key,
            model_id,
            client: reqwest::Client::new(),
        }
    }

    pub fn build_request(&self, prompt: &str) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model_id.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![AnthropicMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }
}

#[async_trait]
impl TextClient for AnthropicClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let response = self
            .client
            .post("https://api.anthropic.com/v1/messages")
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
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
            let message = serde_json::from_str::<AnthropicErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        parsed
            .content
            .into_iter()
            .next()
            .map(|block| block.text)
            .ok_or_else(|| ProviderError::InvalidResponse("empty content".into()))
    }

    fn model_name(&self) -> &str {
        &self.model_id
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
