use crate::api::{ApiError, ErrorResponse, JsonBody};
use crate::AppState;
use axum::{extract::State, Json};
use scout_core::{research, ReportPayload};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateReportResponse {
    /// Report text exactly as the model wrote it
    pub report: String,
}

/// Write an individual or comparison report on the selected products
#[utoipa::path(
    post,
    path = "/generate-report",
    tag = "reports",
    request_body = ReportPayload,
    responses(
        (status = 200, description = "Generated report", body = GenerateReportResponse),
        (status = 422, description = "Invalid profile or empty product selection", body = ErrorResponse),
        (status = 502, description = "AI service error", body = ErrorResponse),
        (status = 503, description = "AI service rate limited", body = ErrorResponse)
    )
)]
pub async fn generate_report(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ReportPayload>,
) -> Result<Json<GenerateReportResponse>, ApiError> {
    let result = research::generate_report(state.llm.as_ref(), &request).await?;

    Ok(Json(GenerateReportResponse {
        report: result.report,
    }))
}
