use crate::api::{ApiError, ErrorResponse, JsonBody};
use crate::AppState;
use axum::{extract::State, Json};
use scout_core::{research, FlatPreferencePayload};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CombinedReportResponse {
    /// Report text exactly as the model wrote it
    pub report: String,
    /// Candidates found by web search (at most 5). Never empty.
    pub products: Vec<String>,
    /// True when the search found nothing and `products` holds a placeholder
    pub products_empty: bool,
    /// The exact prompt sent to the model
    pub prompt: String,
}

/// Search the web for candidates and write a report on them
#[utoipa::path(
    post,
    path = "/v2/generate-report",
    tag = "v2",
    request_body = FlatPreferencePayload,
    responses(
        (status = 200, description = "Generated report with discovered candidates", body = CombinedReportResponse),
        (status = 422, description = "Invalid profile", body = ErrorResponse),
        (status = 502, description = "AI service error", body = ErrorResponse),
        (status = 503, description = "AI service rate limited", body = ErrorResponse)
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<FlatPreferencePayload>,
) -> Result<Json<CombinedReportResponse>, ApiError> {
    let result = research::generate_combined_report(
        state.llm.as_ref(),
        state.discovery.as_ref(),
        &profile,
    )
    .await?;

    Ok(Json(CombinedReportResponse {
        report: result.report,
        products: result.products.items,
        products_empty: result.products.empty,
        prompt: result.prompt,
    }))
}
