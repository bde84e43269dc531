use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::routes::ENDPOINTS;

const SERVICE_NAME: &str = "Niyog AI Backend";

/// GET /
/// Lists the routes this service exposes.
pub async fn index_handler() -> Json<Value> {
    Json(json!({
        "name": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ENDPOINTS,
    }))
}

/// GET /health
/// Liveness probe: `status: "ok"` plus the crate version under `service: "niyog-api"`.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "niyog-api"
    }))
}

#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

/// POST /ai/echo
pub async fn echo_handler(Json(req): Json<EchoRequest>) -> Json<Value> {
    Json(json!({ "echo": req.message }))
}
