//! Server settings from environment variables.

use scout_core::discovery::DEFAULT_SEARCH_URL;
use std::env;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServerConfigError {
    #[error("invalid SCOUT_PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// HTML search endpoint used for candidate discovery.
    pub search_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SCOUT_HOST` (default "0.0.0.0")
    /// - `SCOUT_PORT` (default 8000)
    /// - `SCOUT_SEARCH_URL` (default: DuckDuckGo HTML endpoint)
    pub fn from_env() -> Result<Self, ServerConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SCOUT_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ServerConfigError::InvalidPort(raw.clone()))?,
            None => 8000,
        };

        Ok(Self {
            host: lookup("SCOUT_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            search_url: lookup("SCOUT_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8000");
        assert_eq!(cfg.search_url, DEFAULT_SEARCH_URL);
    }

    #[test]
    fn overrides() {
        let cfg = ServerConfig::from_lookup(|key| match key {
            "SCOUT_HOST" => Some("127.0.0.1".to_string()),
            "SCOUT_PORT" => Some("3000".to_string()),
            "SCOUT_SEARCH_URL" => Some("http://localhost:9999/html/".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:3000");
        assert_eq!(cfg.search_url, "http://localhost:9999/html/");
    }

    #[test]
    fn bad_port() {
        let err = ServerConfig::from_lookup(|key| match key {
            "SCOUT_PORT" => Some("eighty".to_string()),
            _ => None,
        })
        .unwrap_err();
        assert_eq!(err, ServerConfigError::InvalidPort("eighty".to_string()));
    }
}
