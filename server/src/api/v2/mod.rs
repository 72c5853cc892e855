//! Search-backed API with the flat profile shape.
//!
//! Mounted under /v2 so its payload never shares a route with the full profile.

pub mod generate_report;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /v2 endpoints (mounted at /v2)
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-report", post(generate_report::generate_report))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate_report::generate_report),
    components(schemas(
        scout_core::FlatPreferencePayload,
        generate_report::CombinedReportResponse,
    ))
)]
pub struct ApiDoc;
