use crate::anthropic::AnthropicClient;
use crate::client::TextClient;
use crate::google::GoogleClient;
use crate::openai::OpenAIClient;
use crate::provider::Provider;

/// Create a TextClient instance for the given provider.
pub fn create_client(provider: &Provider, api_key: String, model_id: String) -> Box<dyn TextClient> {
    match provider {
        Provider::Google => Box::new(GoogleClient::new(api_key, model_id)),
        Provider::Anthropic => Box::new(AnthropicClient::new(api_key, model_id)),
        Provider::OpenAI => Box::new(OpenAIClient::new(api_key, model_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_google_client() {
        let client = create_client(&Provider::Google, "key".into(), "gemini-2.0-flash".into());
        assert_eq!(client.model_name(), "gemini-2.0-flash");
    }

    #[test]
    fn create_anthropic_client() {
        let client = create_client(
            &Provider::Anthropic,
            "key".into(),
            "claude-sonnet-4-20250514".into(),
        );
        assert_eq!(client.model_name(), "claude-sonnet-4-20250514");
    }

    #[test]
    fn create_openai_client() {
        let client = create_client(&Provider::OpenAI, "key".into(), "gpt-4o-mini".into());
        assert_eq!(client.model_name(), "gpt-4o-mini");
    }
}
