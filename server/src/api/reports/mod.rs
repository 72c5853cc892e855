pub mod generate;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the report endpoint
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-report", post(generate::generate_report))
}

#[derive(OpenApi)]
#[openapi(
    paths(generate::generate_report),
    components(schemas(scout_core::ReportPayload, generate::GenerateReportResponse))
)]
pub struct ApiDoc;
