pub mod error;
pub mod extractor;
pub mod health;
pub mod reports;
pub mod suggestions;
pub mod v2;

use crate::AppState;
use axum::Router;
use scout_core::FieldError;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

pub use error::ApiError;
pub use extractor::JsonBody;

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Per-field problems, present for validation failures only
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: Vec::new(),
        }
    }
}

/// All API routes, without middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(suggestions::router())
        .merge(reports::router())
        .nest("/v2", v2::router())
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "scout",
            description = "Turns a technology preference profile into LLM product shortlists and reports"
        ),
        components(schemas(ErrorResponse, FieldError))
    )]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        health::ApiDoc::openapi(),
        suggestions::ApiDoc::openapi(),
        reports::ApiDoc::openapi(),
        v2::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
