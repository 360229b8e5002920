//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::analysis::report::MatchReport;
use crate::analysis::ExtractedText;
use crate::errors::AppError;
use crate::extract::{extract_blocking, RawDocument};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Text-only request: both documents already decoded by the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeTextRequest {
    #[serde(default)]
    pub resume_text: String,
    pub job_description_text: String,
}

/// Fields collected from the multipart upload.
#[derive(Debug, Default)]
struct UploadForm {
    resume: Option<RawDocument>,
    job_description: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /analyze
///
/// Multipart form with a `resume` file (PDF, DOCX or TXT) and a `job_description`
/// text field. Extracts the resume text, then scores it against the job description.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchReport>, AppError> {
    let request_id = Uuid::new_v4();
    async move {
        let form = read_upload_form(multipart).await?;

        let resume = form.resume.ok_or_else(|| {
            AppError::Validation(format!("Missing '{RESUME_FIELD}' file field"))
        })?;
        let job_description = form
            .job_description
            .filter(|jd| !jd.trim().is_empty())
            .ok_or_else(|| {
                AppError::Validation(format!("'{JOB_DESCRIPTION_FIELD}' cannot be empty"))
            })?;

        info!(
            file_name = resume.file_name.as_deref().unwrap_or("<unnamed>"),
            bytes = resume.bytes.len(),
            "Extracting resume text"
        );
        let resume_text = extract_blocking(resume, state.config.extraction_timeout).await?;

        let report = state
            .analyzer
            .analyze_extracted(&resume_text, &ExtractedText::job_description(job_description))?;
        info!(score = report.score, "Analysis completed");
        Ok::<_, AppError>(Json(report))
    }
    .instrument(info_span!("analyze_upload", %request_id))
    .await
}

/// POST /api/v1/analyze
///
/// JSON variant of `/analyze` for callers that already have plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeTextRequest>, JsonRejection>,
) -> Result<Json<MatchReport>, AppError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();
    let _span = info_span!("analyze_text", %request_id).entered();

    let report = state
        .analyzer
        .analyze(&request.resume_text, &request.job_description_text)?;
    info!(score = report.score, "Analysis completed");
    Ok(Json(report))
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().map(str::to_string);
                let declared_media_type = field.content_type().map(str::to_string);
                let bytes: Bytes = field.bytes().await?;
                form.resume = Some(RawDocument {
                    bytes,
                    declared_media_type,
                    file_name,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                form.job_description = Some(field.text().await?);
            }
            // Unknown fields are ignored.
            _ => {}
        }
    }

    Ok(form)
}
