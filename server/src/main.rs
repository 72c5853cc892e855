mod api;
mod config;
mod telemetry;

use anyhow::Context;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use axum::Router;
use scout_core::discovery::{CandidateSource, SearchDiscovery};
use scout_core::llm::{create_provider, LlmConfig, LlmProvider};
use scout_core::ReqwestClient;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Level, Span};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmProvider>,
    pub discovery: Arc<dyn CandidateSource>,
}

/// Any origin, method and header, with credentials.
///
/// A literal `*` is not allowed alongside credentials, so the request's own
/// values are mirrored back instead.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Paths polled by orchestrators; traced at TRACE so they stay out of the logs.
const QUIET_PATHS: &[&str] = &["/health"];

/// One `http_request` span per call, with status and latency on completion.
fn with_request_tracing(router: Router) -> Router {
    let layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let path = request
                .extensions()
                .get::<MatchedPath>()
                .map(MatchedPath::as_str)
                .unwrap_or(request.uri().path());

            if QUIET_PATHS.contains(&path) {
                tracing::trace_span!("http_request")
            } else {
                tracing::info_span!("http_request", method = %request.method(), path = %path)
            }
        })
        .on_request(|_request: &Request<_>, _span: &Span| {})
        .on_response(|response: &Response<_>, latency: Duration, span: &Span| {
            let quiet = span.metadata().map(|m| *m.level()) == Some(Level::TRACE);
            if quiet {
                return;
            }
            let status = response.status().as_u16();
            let latency_ms = latency.as_millis();
            if response.status().is_server_error() {
                tracing::error!(status, latency_ms, "request failed with server error");
            } else {
                tracing::info!(status, latency_ms, "request completed");
            }
        })
        .on_failure(
            |failure: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(
                    error = %failure,
                    latency_ms = latency.as_millis(),
                    "request failed"
                );
            },
        );

    router.layer(layer)
}

fn build_router(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    let app = Router::new()
        .merge(api::router())
        .with_state(state)
        .merge(swagger_ui);

    with_request_tracing(app).layer(cors_layer())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Check for --openapi flag to dump spec and exit
    if env::args().any(|arg| arg == "--openapi") {
        println!("{}", api::openapi().to_pretty_json()?);
        return Ok(());
    }

    // Best-effort .env load; ignore if missing
    let _ = dotenvy::dotenv();

    telemetry::init_telemetry();

    let server_config = ServerConfig::from_env()?;
    let llm_config = LlmConfig::from_env().context("model client is not configured")?;

    let llm = create_provider(&llm_config)?;
    tracing::info!(
        provider = llm.provider_name(),
        model = llm.model_name(),
        "LLM provider ready"
    );

    let http = ReqwestClient::new().context("failed to build HTTP client")?;
    let discovery = SearchDiscovery::new(Arc::new(http), server_config.search_url.clone());

    let state = AppState {
        llm,
        discovery: Arc::new(discovery),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(server_config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", server_config.bind_addr()))?;

    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
