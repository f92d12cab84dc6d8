use std::path::PathBuf;

use anyhow::Context;

use parlor_llm::provider::Provider;

/// Server configuration resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub password: String,
    pub assets_dir: PathBuf,
    pub google_model: String,
    pub anthropic_model: String,
    pub openai_model: String,
    pub google_api_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub openai_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {raw}"))?,
            Err(_) => 3002,
        };

        Ok(Self {
            port,
            password: std::env::var("PARLOR_PASSWORD")
                .unwrap_or_else(|_| "changeme123".to_string()),
            assets_dir: PathBuf::from(
                std::env::var("PARLOR_ASSETS_DIR").unwrap_or_else(|_| "assets".to_string()),
            ),
            google_model: model_from_env(&Provider::Google),
            anthropic_model: model_from_env(&Provider::Anthropic),
            openai_model: model_from_env(&Provider::OpenAI),
            google_api_key: key_from_env("GOOGLE_API_KEY"),
            anthropic_api_key: key_from_env("ANTHROPIC_API_KEY"),
            openai_api_key: key_from_env("OPENAI_API_KEY"),
        })
    }

    pub fn model_for(&self, provider: &Provider) -> String {
        match provider {
            Provider::Google => self.google_model.clone(),
            Provider::Anthropic => self.anthropic_model.clone(),
            Provider::OpenAI => self.openai_model.clone(),
        }
    }

    /// Server-side key handed to logged-in clients through `/keys.js`.
    pub fn preloaded_key(&self, provider: &Provider) -> Option<&str> {
        let key = match provider {
            Provider::Google => &self.google_api_key,
            Provider::Anthropic => &self.anthropic_api_key,
            Provider::OpenAI => &self.openai_api_key,
        };
        key.as_deref()
    }
}

fn model_from_env(provider: &Provider) -> String {
    std::env::var(provider.model_env_var())
        .unwrap_or_else(|_| provider.default_model().to_string())
}

/// Empty strings count as unset so a blank line in `.env` does not hand the
/// client an empty key.
fn key_from_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Env vars are process-global, so defaults and overrides are exercised
    /// in one test to keep the mutation in a single place.
    #[test]
    fn from_env_defaults_and_overrides() {
        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("PARLOR_PASSWORD");
            std::env::remove_var("PARLOR_ASSETS_DIR");
            std::env::remove_var("GOOGLE_MODEL");
            std::env::remove_var("ANTHROPIC_MODEL");
            std::env::remove_var("OPENAI_MODEL");
            std::env::remove_var("GOOGLE_API_KEY");
            std::env::remove_var("ANTHROPIC_API_KEY");
            std::env::remove_var("OPENAI_API_KEY");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 3002);
        assert_eq!(config.password, "changeme123");
        assert_eq!(config.assets_dir, PathBuf::from("assets"));
        assert_eq!(config.google_model, "gemini-2.0-flash");
        assert_eq!(config.anthropic_model, "claude-sonnet-4-20250514");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert!(config.google_api_key.is_none());
        assert!(config.anthropic_api_key.is_none());
        assert!(config.openai_api_key.is_none());

        unsafe {
            std::env::set_var("PORT", "8123");
            std::env::set_var("PARLOR_PASSWORD", "sesame");
            std::env::set_var("PARLOR_ASSETS_DIR", "/tmp/parlor-assets");
            std::env::set_var("GOOGLE_MODEL", "gemini-custom");
            std::env::set_var("GOOGLE_API_KEY", "AIzaPreloaded");
            std::env::set_var("ANTHROPIC_API_KEY", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 8123);
        assert_eq!(config.password, "sesame");
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/parlor-assets"));
        assert_eq!(config.google_model, "gemini-custom");
        assert_eq!(config.google_api_key.as_deref(), Some("AIzaPreloaded"));
        // Set-but-empty counts as unset.
        assert!(config.anthropic_api_key.is_none());

        unsafe {
            std::env::set_var("PORT", "not-a-port");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            std::env::remove_var("PORT");
            std::env::remove_var("PARLOR_PASSWORD");
            std::env::remove_var("PARLOR_ASSETS_DIR");
            std::env::remove_var("GOOGLE_MODEL");
            std::env::remove_var("GOOGLE_API_KEY");
            std::env::remove_var("ANTHROPIC_API_KEY");
        }
    }

    #[test]
    fn model_for_each_provider() {
        let config = test_config();
        assert_eq!(config.model_for(&Provider::Google), "g-model");
        assert_eq!(config.model_for(&Provider::Anthropic), "a-model");
        assert_eq!(config.model_for(&Provider::OpenAI), "o-model");
    }

    #[test]
    fn preloaded_key_lookup() {
        let config = test_config();
        assert_eq!(config.preloaded_key(&Provider::Google), Some("AIzaKey"));
        assert!(config.preloaded_key(&Provider::Anthropic).is_none());
        assert_eq!(config.preloaded_key(&Provider::OpenAI), Some("sk-key"));
    }

    fn test_config() -> Config {
        Config {
            port: 0,
            password: "pw".into(),
            assets_dir: PathBuf::from("assets"),
            google_model: "g-model".into(),
            anthropic_model: "a-model".into(),
            openai_model: "o-model".into(),
            google_api_key: Some("AIzaKey".into()),
            anthropic_api_key: None,
            openai_api_key: Some("sk-key".into()),
        }
    }
}
