//! Model client configuration from environment variables.

use std::env;
use thiserror::Error;

/// Default Gemini REST base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro-002";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Unknown LLM provider: {0} (expected \"gemini\" or \"fake\")")]
    UnknownProvider(String),
}

/// Which backend answers prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Gemini,
    /// Canned responses, no network. For local development and tests.
    Fake,
}

/// Model client configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: ProviderKind,
    /// API key for the hosted model. Empty for the fake provider.
    pub api_key: String,
    /// Model name (e.g., "gemini-1.5-pro-002").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SCOUT_LLM_PROVIDER`: "gemini" (default) or "fake"
    /// - `GEMINI_API_KEY`: required for gemini
    /// - `SCOUT_LLM_MODEL`: model name (default: "gemini-1.5-pro-002")
    /// - `SCOUT_LLM_BASE_URL`: API base URL
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("SCOUT_LLM_PROVIDER").as_deref() {
            None | Some("gemini") => ProviderKind::Gemini,
            Some("fake") => ProviderKind::Fake,
            Some(other) => return Err(ConfigError::UnknownProvider(other.to_string())),
        };

        // An empty key is as useless as a missing one
        let api_key = lookup("GEMINI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_key = match (provider, api_key) {
            (ProviderKind::Gemini, None) => {
                return Err(ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))
            }
            (_, key) => key.unwrap_or_default(),
        };

        let model = lookup("SCOUT_LLM_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("SCOUT_LLM_BASE_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            provider,
            api_key,
            model,
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_gemini_defaults() {
        let config = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "abc")])).unwrap();
        assert_eq!(config.provider, ProviderKind::Gemini);
        assert_eq!(config.api_key, "abc");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        let err = LlmConfig::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()));
        assert!(err.to_string().contains("GEMINI_API_KEY"));

        let err = LlmConfig::from_lookup(lookup(&[("GEMINI_API_KEY", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()));
    }

    #[test]
    fn test_fake_needs_no_key() {
        let config = LlmConfig::from_lookup(lookup(&[("SCOUT_LLM_PROVIDER", "fake")])).unwrap();
        assert_eq!(config.provider, ProviderKind::Fake);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = LlmConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "abc"),
            ("SCOUT_LLM_MODEL", "gemini-2.0-flash"),
            ("SCOUT_LLM_BASE_URL", "http://localhost:9000/v1beta/"),
        ]))
        .unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.base_url, "http://localhost:9000/v1beta");
    }

    #[test]
    fn test_unknown_provider() {
        let err = LlmConfig::from_lookup(lookup(&[("SCOUT_LLM_PROVIDER", "openai")])).unwrap_err();
        assert_eq!(err, ConfigError::UnknownProvider("openai".to_string()));
    }
}
