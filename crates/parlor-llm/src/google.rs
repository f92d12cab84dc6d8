use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, TextClient};
use crate::error::{ProviderError, Result};

// ---------------------------------------------------------------------------
// generateContent request types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleRequest {
    pub contents: Vec<GoogleContent>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GoogleContent {
    pub parts: Vec<GooglePart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GooglePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

// ---------------------------------------------------------------------------
// generateContent response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GoogleResponse {
    pub candidates: Option<Vec<GoogleCandidate>>,
}

#[derive(Debug, Deserialize)]
pub struct GoogleCandidate {
    pub content: GoogleContent,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorBody {
    pub error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GoogleErrorDetail {
    pub message: String,
}

// ---------------------------------------------------------------------------
// GoogleClient
// ---------------------------------------------------------------------------

/// Console keys start with `AIza`; anything else fails before the outbound
/// call is made.
pub fn validate_api_key(key: &str) -> Result<()> {
    if key.is_empty() || !key.starts_with("AIza") {
        return Err(ProviderError::InvalidApiKey(
            "Invalid Google API key format. Please check your API key.".into(),
        ));
    }
    Ok(())
}

pub struct GoogleClient {
    api_key: String,
    model_id: String,
    client: reqwest::Client,
}

impl GoogleClient {
    pub fn new(api_key: String, model_id: String) -> Self {
        Self {
            api_key: api_key.trim().to_string(),
            model_id,
            client: reqwest::Client::new(),
        }
    }

    pub fn build_request(&self, prompt: &str) -> GoogleRequest {
        GoogleRequest {
            contents: vec![GoogleContent {
                parts: vec![GooglePart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: DEFAULT_TEMPERATURE,
                max_output_tokens: DEFAULT_MAX_TOKENS,
            },
        }
    }
}

#[async_trait]
impl TextClient for GoogleClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        validate_api_key(&self.api_key)?;

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model_id, self.api_key
        );

        let response = self
            .client
            .post(&url)
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
            let message = serde_json::from_str::<GoogleErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(ProviderError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GoogleResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        extract_text(&parsed)
            .ok_or_else(|| ProviderError::InvalidResponse("no text in first candidate".into()))
    }

    fn model_name(&self) -> &str {
        &self.model_id
    }
}

/// Pulls `candidates[0].content.parts[0].text` out of a generateContent
/// reply.
fn extract_text(resp: &GoogleResponse) -> Option<String> {
    resp.candidates
        .as_ref()?
        .first()?
        .content
        .parts
        .first()?
        .text
        .clone()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
