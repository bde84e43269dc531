use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;
use thiserror::Error;

use crate::completion::CompletionError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Misconfigured: {0}")]
    Misconfigured(String),

    /// An upstream error response, passed through untouched.
    #[error("Upstream error (status {status})")]
    Upstream {
        status: u16,
        content_type: Option<String>,
        body: Bytes,
    },

    #[error("Upstream unavailable: {0}")]
    BadGateway(String),

    #[error("Upstream timed out")]
    GatewayTimeout,
}

impl From<CompletionError> for AppError {
    fn from(e: CompletionError) -> Self {
        match e {
            CompletionError::MissingApiKey => AppError::Misconfigured(e.to_string()),
            CompletionError::Upstream {
                status,
                content_type,
                body,
            } => AppError::Upstream {
                status,
                content_type,
                body,
            },
            CompletionError::Timeout => AppError::GatewayTimeout,
            CompletionError::Http(_) | CompletionError::Parse(_) => {
                AppError::BadGateway(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::Upstream {
                status,
                content_type,
                body,
            } => {
                let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                let mut response = (status, body).into_response();
                let content_type = content_type.and_then(|ct| ct.parse::<HeaderValue>().ok());
                if let Some(value) = content_type {
                    response.headers_mut().insert(header::CONTENT_TYPE, value);
                }
                return response;
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::Misconfigured(msg) => {
                tracing::error!("Misconfiguration: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "MISCONFIGURED", msg)
            }
            AppError::BadGateway(msg) => {
                tracing::error!("Upstream error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "The completion provider could not be reached".to_string(),
                )
            }
            AppError::GatewayTimeout => {
                tracing::warn!("Upstream request timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "UPSTREAM_TIMEOUT",
                    "The completion provider did not respond in time".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
