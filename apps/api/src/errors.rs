use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::analysis::AnalysisError;
use crate::extract::ExtractError;
use crate::narrative::client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Extraction error: {0}")]
    Extraction(ExtractError),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Narrative analysis is not configured")]
    NarrativeUnavailable,

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat(_) => AppError::Validation(err.to_string()),
            ExtractError::Timeout(_) => AppError::Timeout(err.to_string()),
            other => AppError::Extraction(other),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(err.body_text())
        } else {
            AppError::Validation(format!("Malformed multipart body: {}", err.body_text()))
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Analysis(e @ AnalysisError::EmptyInput { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "EMPTY_INPUT", e.to_string())
            }
            AppError::Analysis(e @ AnalysisError::InsufficientSignal) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "INSUFFICIENT_SIGNAL",
                e.to_string(),
            ),
            AppError::Extraction(e) => {
                tracing::warn!("Extraction error: {e}");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "EXTRACTION_FAILED",
                    "Could not read text from the uploaded file".to_string(),
                )
            }
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Timeout(msg) => {
                tracing::warn!("Timeout: {msg}");
                (StatusCode::GATEWAY_TIMEOUT, "TIMEOUT", msg.clone())
            }
            AppError::NarrativeUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "NARRATIVE_UNAVAILABLE",
                "Narrative analysis is not configured on this server".to_string(),
            ),
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::TextSource;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_empty_input_maps_to_422() {
        let (status, body) = render(AppError::from(AnalysisError::EmptyInput {
            document: TextSource::ResumeText,
        }))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EMPTY_INPUT");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("resume"));
    }

    #[tokio::test]
    async fn test_insufficient_signal_maps_to_422() {
        let (status, body) = render(AnalysisError::InsufficientSignal.into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "INSUFFICIENT_SIGNAL");
    }

    #[tokio::test]
    async fn test_unsupported_format_is_a_validation_error() {
        let (status, body) =
            render(ExtractError::UnsupportedFormat("cv.doc".to_string()).into()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("cv.doc"));
    }

    #[tokio::test]
    async fn test_extraction_details_are_not_echoed() {
        let (status, body) =
            render(ExtractError::Pdf("xref table at offset 1234".to_string()).into()).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "EXTRACTION_FAILED");
        assert!(!body["error"]["message"].as_str().unwrap().contains("1234"));
    }

    #[tokio::test]
    async fn test_narrative_unavailable_is_503() {
        let (status, body) = render(AppError::NarrativeUnavailable).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "NARRATIVE_UNAVAILABLE");
    }
}
