use crate::api::{ApiError, ErrorResponse, JsonBody};
use crate::AppState;
use axum::{extract::State, Json};
use scout_core::{research, PreferencePayload};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestProductsResponse {
    /// Product names in the order the model gave them. Never empty.
    pub products: Vec<String>,
    /// True when the model produced nothing and `products` holds a placeholder
    pub empty: bool,
}

/// Suggest 3-5 products for a preference profile
#[utoipa::path(
    post,
    path = "/suggest-products",
    tag = "suggestions",
    request_body = PreferencePayload,
    responses(
        (status = 200, description = "Suggested products", body = SuggestProductsResponse),
        (status = 422, description = "Invalid profile", body = ErrorResponse),
        (status = 502, description = "AI service error", body = ErrorResponse),
        (status = 503, description = "AI service rate limited", body = ErrorResponse)
    )
)]
pub async fn suggest_products(
    State(state): State<AppState>,
    JsonBody(profile): JsonBody<PreferencePayload>,
) -> Result<Json<SuggestProductsResponse>, ApiError> {
    let result = research::suggest_products(state.llm.as_ref(), &profile).await?;

    Ok(Json(SuggestProductsResponse {
        products: result.products.items,
        empty: result.products.empty,
    }))
}
