//! Axum route handler for the narrative endpoint.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::analysis::handlers::AnalyzeTextRequest;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/v1/narrative
///
/// Forwards both texts to the configured LLM and returns its JSON verbatim.
/// 503 when no provider is configured, 504 when the model does not answer in time.
pub async fn handle_narrative(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = payload?;
    let provider = state
        .narrator
        .as_ref()
        .ok_or(AppError::NarrativeUnavailable)?;

    if request.job_description_text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description_text cannot be empty".to_string(),
        ));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }

    let timeout = state.config.narrative_timeout();
    let narrative = tokio::time::timeout(
        timeout,
        provider.narrate(&request.resume_text, &request.job_description_text),
    )
    .await
    .map_err(|_| AppError::Timeout(format!("narrative analysis exceeded {timeout:?}")))??;

    info!("Narrative analysis completed");
    Ok(Json(narrative))
}
