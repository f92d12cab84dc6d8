use serde::{Deserialize, Serialize};

/// One of the three supported upstream text-generation backends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Google,
    Anthropic,
    OpenAI,
}

impl Provider {
    /// Model used when no per-provider override is configured.
    pub fn default_model(&self) -> &'static str {
        match self {
            Provider::Google => "gemini-2.0-flash",
            Provider::Anthropic => "claude-sonnet-4-20250514",
            Provider::OpenAI => "gpt-4o-mini",
        }
    }

    /// Environment variable consulted for a model override.
    pub fn model_env_var(&self) -> &'static str {
        match self {
            Provider::Google => "GOOGLE_MODEL",
            Provider::Anthropic => "ANTHROPIC_MODEL",
            Provider::OpenAI => "OPENAI_MODEL",
        }
    }
}
