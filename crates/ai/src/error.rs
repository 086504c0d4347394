//! Theme generation error types.

use thiserror::Error;

/// Errors raised while generating a themed quote.
#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// No API key configured for the provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Transport failure (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Provider rejected the call because the quota is exhausted (HTTP 429).
    #[error("Provider quota exceeded")]
    QuotaExceeded,

    /// Provider answered with a non-success status.
    #[error("Provider returned status {0}")]
    Server(u16),

    /// Response body could not be read as a completion.
    #[error("Failed to parse provider response: {0}")]
    Parse(String),
}

impl AiError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        AiError::Http(e.to_string())
    }
}
