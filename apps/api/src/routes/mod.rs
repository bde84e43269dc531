pub mod general;

use anyhow::{Context, Result};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::completion;
use crate::insights::handlers;
use crate::state::AppState;

/// Every route served by `build_router`, as advertised by `GET /`.
pub const ENDPOINTS: &[&str] = &[
    "/health",
    "/ai/echo",
    "/ai/complete",
    "/ai/match",
    "/ai/blind-spots",
    "/ai/cv-analysis",
    "/ai/analyse-profile",
    "/ai/interview-simulator",
    "/ai/growth-insights",
];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(general::index_handler))
        .route("/health", get(general::health_handler))
        .route("/ai/echo", post(general::echo_handler))
        // Upstream completion proxy
        .route("/ai/complete", post(completion::handlers::handle_complete))
        // Insight heuristics
        .route("/ai/match", post(handlers::handle_match))
        .route("/ai/blind-spots", post(handlers::handle_blind_spots))
        .route(
            "/ai/cv-analysis",
            post(handlers::handle_cv_analysis).get(handlers::handle_latest_cv_analysis),
        )
        .route("/ai/analyse-profile", post(handlers::handle_analyse_profile))
        .route("/ai/interview-simulator", post(handlers::handle_interview_simulator))
        .route("/ai/growth-insights", post(handlers::handle_growth_insights))
        .with_state(state)
}

/// CORS policy for the configured origin allow-list. Credentials are allowed, so
/// methods and headers are mirrored from the request rather than wildcarded.
/// A `*` entry mirrors any origin.
pub fn build_cors(allowed_origins: &[String]) -> Result<CorsLayer> {
    let allow_origin = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid origin in ALLOWED_ORIGINS: '{o}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
