use crate::api::{ApiError, ErrorResponse, JsonBody};
use crate::AppState;
use axum::{extract::State, Json};
use scout_core::{research, ToolSuggestionRequest};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestTechOptionsResponse {
    /// Tool names with bullet markers removed. Never empty.
    pub tools: Vec<String>,
    /// True when the model produced nothing and `tools` holds a placeholder
    pub empty: bool,
}

/// List 5-10 tools commonly used for a purpose
#[utoipa::path(
    post,
    path = "/suggest-tech-options",
    tag = "suggestions",
    request_body = ToolSuggestionRequest,
    responses(
        (status = 200, description = "Suggested tools", body = SuggestTechOptionsResponse),
        (status = 422, description = "Missing purpose", body = ErrorResponse),
        (status = 502, description = "AI service error", body = ErrorResponse),
        (status = 503, description = "AI service rate limited", body = ErrorResponse)
    )
)]
pub async fn suggest_tech_options(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ToolSuggestionRequest>,
) -> Result<Json<SuggestTechOptionsResponse>, ApiError> {
    let result = research::suggest_tech_options(state.llm.as_ref(), &request).await?;

    Ok(Json(SuggestTechOptionsResponse {
        tools: result.tools.items,
        empty: result.tools.empty,
    }))
}
