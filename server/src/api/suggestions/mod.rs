pub mod products;
pub mod tech_options;

use crate::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the suggestion endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/suggest-products", post(products::suggest_products))
        .route("/suggest-tech-options", post(tech_options::suggest_tech_options))
}

#[derive(OpenApi)]
#[openapi(
    paths(products::suggest_products, tech_options::suggest_tech_options),
    components(schemas(
        scout_core::PreferencePayload,
        scout_core::ToolSuggestionRequest,
        products::SuggestProductsResponse,
        tech_options::SuggestTechOptionsResponse,
    ))
)]
pub struct ApiDoc;
