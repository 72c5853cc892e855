//! Mapping library errors to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use scout_core::llm::LlmError;
use scout_core::{ResearchError, ValidationError};

use crate::api::ErrorResponse;

/// Every failure a handler can report.
#[derive(Debug)]
pub enum ApiError {
    /// Body was not JSON or did not match the payload shape.
    Body(JsonRejection),
    /// Payload parsed but failed content validation.
    Validation(ValidationError),
    /// The model call failed.
    Llm(LlmError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl From<ResearchError> for ApiError {
    fn from(err: ResearchError) -> Self {
        match err {
            ResearchError::Validation(e) => ApiError::Validation(e),
            ResearchError::Llm(e) => ApiError::Llm(e),
        }
    }
}

fn llm_status(err: &LlmError) -> StatusCode {
    match err {
        LlmError::RateLimited { .. } => StatusCode::SERVICE_UNAVAILABLE,
        LlmError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
        LlmError::RequestFailed(_) | LlmError::ApiError { .. } | LlmError::ParseError(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Body(rejection) => {
                let status = rejection.status();
                (status, Json(ErrorResponse::new(rejection.body_text()))).into_response()
            }
            ApiError::Validation(e) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse {
                    error: e.to_string(),
                    fields: e.fields,
                }),
            )
                .into_response(),
            ApiError::Llm(e) => {
                let status = llm_status(&e);
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %e, "Model client misconfigured");
                }

                let mut response =
                    (status, Json(ErrorResponse::new(format!("AI service error: {}", e))))
                        .into_response();

                if let LlmError::RateLimited {
                    retry_after_secs: Some(secs),
                } = e
                {
                    if let Ok(value) = HeaderValue::from_str(&secs.to_string()) {
                        response.headers_mut().insert(header::RETRY_AFTER, value);
                    }
                }
                response
            }
        }
    }
}
