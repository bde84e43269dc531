mod cache;
mod completion;
mod config;
mod errors;
mod insights;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::completion::OpenAiCompletionClient;
use crate::config::Config;
use crate::routes::{build_cors, build_router};
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Niyog API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize completion client (key is checked per request, not here)
    let completion = OpenAiCompletionClient::new(
        config.openai_api_key.clone(),
        config.openai_api_base.clone(),
        config.completion_timeout,
    )?;
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /ai/complete will respond with 500");
    }
    info!(
        "Completion client initialized ({}, timeout {:?})",
        config.openai_api_base, config.completion_timeout
    );

    // Build app state
    let state = AppState::new(Arc::new(completion));

    let cors = build_cors(&config.allowed_origins)?;
    info!("CORS allowed origins: {:?}", config.allowed_origins);

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
