use serde::{Deserialize, Serialize};

use parlor_llm::provider::Provider;

// --- Generation ---

/// Body of `POST /api/generate`. Field presence is checked in the handler so
/// a missing key or prompt becomes a 400 in the envelope rather than a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub provider: Option<Provider>,
    #[serde(default)]
    pub is_text_response: Option<bool>,
}

/// The uniform envelope every `/api/generate` reply uses, success or not.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_text_response: Option<bool>,
}

impl GenerateResponse {
    pub fn ok(content: String, is_text_response: bool) -> Self {
        Self {
            success: true,
            content: Some(content),
            error: None,
            is_text_response: Some(is_text_response),
        }
    }
}

// --- Auth ---

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}
