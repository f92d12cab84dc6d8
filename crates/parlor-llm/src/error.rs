use thiserror::Error;

/// Errors from a call to an upstream text-generation provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API key failed local validation; no outbound call was made.
    #[error("{0}")]
    InvalidApiKey(String),

    /// The outbound HTTP call itself failed (connect, TLS, body read).
    #[error("API request failed: {0}")]
    Request(String),

    /// The provider replied non-2xx. `message` is the provider's own error
    /// text, kept verbatim so callers can relay it.
    #[error("HTTP {status}: {message}")]
    Upstream { status: u16, message: String },

    /// The provider replied 2xx but the expected text field was missing.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

pub type Result<T> = std::result::Result<T, ProviderError>;
