//! LLM provider abstraction.
//!
//! Handlers only see the [`LlmProvider`] trait. The concrete provider is built
//! once at startup from an [`LlmConfig`] and shared read-only between requests.

mod config;
mod fake;
mod gemini;

pub use config::{ConfigError, LlmConfig, ProviderKind, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Error type for LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe. No retries are attempted; a failed
/// call is reported to the caller as-is.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the LLM and get the completion text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-1.5-pro-002").
    fn model_name(&self) -> &str;
}

/// Build the provider described by `config`.
pub fn create_provider(config: &LlmConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    match config.provider {
        ProviderKind::Fake => Ok(Arc::new(FakeProvider::with_research_responses())),
        ProviderKind::Gemini => {
            if config.api_key.is_empty() {
                return Err(LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()));
            }
            Ok(Arc::new(GeminiProvider::new(
                config.api_key.clone(),
                config.model.clone(),
                config.base_url.clone(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_fake_provider() {
        let config = LlmConfig {
            provider: ProviderKind::Fake,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "fake");
    }

    #[test]
    fn test_create_gemini_provider() {
        let config = LlmConfig {
            provider: ProviderKind::Gemini,
            api_key: "key".to_string(),
            model: "gemini-2.0-flash".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.provider_name(), "gemini");
        assert_eq!(provider.model_name(), "gemini-2.0-flash");
    }

    #[test]
    fn test_gemini_without_key_not_configured() {
        let config = LlmConfig {
            provider: ProviderKind::Gemini,
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        };
        let err = create_provider(&config).unwrap_err();
        assert!(matches!(err, LlmError::NotConfigured(_)));
    }
}
