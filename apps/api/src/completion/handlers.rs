use axum::{extract::State, Json};

use crate::completion::{Completion, CompletionRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /ai/complete
///
/// Proxies a prompt to the completion provider. Upstream error responses are
/// forwarded with their original status and body.
pub async fn handle_complete(
    State(state): State<AppState>,
    Json(request): Json<CompletionRequest>,
) -> Result<Json<Completion>, AppError> {
    let completion = state.completion.complete(&request).await?;
    Ok(Json(completion))
}
