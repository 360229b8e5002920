pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::narrative::handlers as narrative;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Multipart upload (resume file + job description text)
        .route("/analyze", post(analysis::handle_analyze_upload))
        // JSON API
        .route("/api/v1/analyze", post(analysis::handle_analyze_text))
        .route("/api/v1/narrative", post(narrative::handle_narrative))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
