//! Google Gemini provider (`generateContent` REST endpoint).

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::{Deserialize, Serialize};

/// Gemini API provider.
#[derive(Debug)]
pub struct GeminiProvider {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    /// Create a new GeminiProvider for `model` served under `base_url`.
    pub fn new(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Error envelope returned by Google APIs.
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Pull the completion text out of a successful response body.
fn extract_text(body: &str) -> Result<String, LlmError> {
    let response: GenerateContentResponse =
        serde_json::from_str(body).map_err(|e| LlmError::ParseError(e.to_string()))?;

    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(LlmError::ParseError(format!(
            "Prompt blocked by model: {}",
            reason
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::ParseError("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(LlmError::ParseError(format!(
            "No text content in response (finish reason: {})",
            reason
        )));
    }

    Ok(text)
}

/// Turn a non-success body into an API error, preferring Google's message.
fn api_error(status: u16, body: String) -> LlmError {
    match serde_json::from_str::<GeminiErrorResponse>(&body) {
        Ok(error_response) => {
            let message = match error_response.error.status {
                Some(code) => format!("{}: {}", code, error_response.error.message),
                None => error_response.error.message,
            };
            LlmError::ApiError { status, message }
        }
        Err(_) => LlmError::ApiError {
            status,
            message: body,
        },
    }
}

/// Map a response status to an error, or `None` for success.
///
/// 429 becomes `RateLimited` carrying `Retry-After` when it holds whole seconds.
fn status_error(status: u16, headers: &HeaderMap, body: &str) -> Option<LlmError> {
    if status == 429 {
        let retry_after_secs = headers
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok());
        return Some(LlmError::RateLimited { retry_after_secs });
    }

    if !(200..300).contains(&status) {
        return Some(api_error(status, body.to_string()));
    }

    None
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.model, "Calling Gemini API");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();

        let body = response
            .text()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        if let Some(err) = status_error(status, &headers, &body) {
            return Err(err);
        }

        extract_text(&body)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_endpoint() {
        let provider = GeminiProvider::new(
            "key".to_string(),
            "gemini-1.5-pro-002".to_string(),
            "https://generativelanguage.googleapis.com/v1beta".to_string(),
        );
        assert_eq!(
            provider.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-pro-002:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"contents": [{"role": "user", "parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "Jenkins\n"}, {"text": "GitLab CI"}]},
                "finishReason": "STOP"
            }]
        }"#;
        assert_eq!(extract_text(body).unwrap(), "Jenkins\nGitLab CI");
    }

    #[test]
    fn test_extract_text_blocked_prompt() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let err = extract_text(body).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_extract_text_no_content() {
        let body = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        let err = extract_text(body).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));

        let err = extract_text(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, LlmError::ParseError(_)));
    }

    #[test]
    fn test_api_error_envelope() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}}"#;
        match api_error(400, body.to_string()) {
            LlmError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "INVALID_ARGUMENT: API key not valid.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_rate_limited() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("30"));
        assert!(matches!(
            status_error(429, &headers, ""),
            Some(LlmError::RateLimited {
                retry_after_secs: Some(30)
            })
        ));

        assert!(matches!(
            status_error(429, &HeaderMap::new(), "quota exceeded"),
            Some(LlmError::RateLimited {
                retry_after_secs: None
            })
        ));
    }

    #[test]
    fn test_status_error_http_date_retry_after_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert!(matches!(
            status_error(429, &headers, ""),
            Some(LlmError::RateLimited {
                retry_after_secs: None
            })
        ));
    }

    #[test]
    fn test_status_error_server_error() {
        let body = r#"{"error": {"code": 500, "message": "Internal error encountered.", "status": "INTERNAL"}}"#;
        match status_error(500, &HeaderMap::new(), body) {
            Some(LlmError::ApiError { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "INTERNAL: Internal error encountered.");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_status_error_success() {
        assert!(status_error(200, &HeaderMap::new(), "{}").is_none());
    }

    #[test]
    fn test_api_error_raw_body() {
        match api_error(502, "upstream down".to_string()) {
            LlmError::ApiError { message, .. } => assert_eq!(message, "upstream down"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
