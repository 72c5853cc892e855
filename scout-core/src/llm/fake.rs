//! Fake LLM provider for testing and local development.
//!
//! Responses are matched by prompt substring, so tests run without network
//! access or API costs. Every prompt received is recorded for inspection.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake LLM provider.
///
/// Responses are matched by checking if the prompt contains a registered substring.
/// If no match is found, returns the default response or an error.
#[derive(Debug, Default)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: HashMap<String, String>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Every prompt seen, oldest first
    prompts: RwLock<Vec<String>>,
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .insert(prompt_contains.to_lowercase(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Canned answers for each prompt kind the service sends.
    pub fn with_research_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "smart tech recommender",
            "- GitHub Actions\n- GitLab CI/CD\n- CircleCI\n- Jenkins",
        );

        provider.add_response(
            "5 to 10 specific tools",
            "• Kubernetes\n• Docker Swarm\n• Nomad\n• Amazon ECS\n• OpenShift",
        );

        provider.add_response(
            "technical analyst",
            "## Overview\n\nThis is a generated report.\n\n## Recommendation\n\nPick the first option.",
        );

        provider
    }

    /// All prompts received so far.
    pub fn received_prompts(&self) -> Vec<String> {
        self.prompts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recent prompt, if any.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .push(prompt.to_string());

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in &self.responses {
            if prompt_lower.contains(pattern.as_str()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                prompt.chars().take(100).collect::<String>()
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}
