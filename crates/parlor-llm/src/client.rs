use async_trait::async_trait;

use crate::error::Result;

/// Sampling temperature sent on every call, for providers that accept one.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Output token cap sent on every call.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

/// A client for one upstream text-generation provider.
///
/// Implementations handle payload construction, the outbound HTTP call,
/// and extraction of the generated text from that provider's response
/// shape. One call, one round trip; no retries or streaming.
#[async_trait]
pub trait TextClient: Send + Sync {
    /// Send `prompt` upstream and return the generated text.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// The model identifier this client targets.
    fn model_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockClient {
        response: String,
    }

    #[async_trait]
    impl TextClient for MockClient {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok(self.response.clone())
        }

        fn model_name(&self) -> &str {
            "mock-model"
        }
    }

    #[tokio::test]
    async fn mock_client_generate() {
        let client = MockClient {
            response: "Hello!".into(),
        };
        let text = client.generate("Hi").await.unwrap();
        assert_eq!(text, "Hello!");
    }

    #[test]
    fn mock_client_name() {
        let client = MockClient {
            response: String::new(),
        };
        assert_eq!(client.model_name(), "mock-model");
    }

    #[test]
    fn call_constants() {
        assert_eq!(DEFAULT_TEMPERATURE, 0.7);
        assert_eq!(DEFAULT_MAX_TOKENS, 1024);
    }
}
