//! Axum route handlers for the interview preparation pipeline.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, AppJson};
use crate::interview::models::{AnswerFeedback, CandidateProfile, FitScore, InterviewQuestion, RawDocument};
use crate::interview::IngestOutcome;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "job_description";
const PDF_MEDIA_TYPE: &str = "application/pdf";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ParseResumeResponse {
    pub interaction_id: Uuid,
    pub resume_data: CandidateProfile,
    pub questions: Vec<InterviewQuestion>,
    pub ats_score: FitScore,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: AnswerFeedback,
}

struct ResumeUpload {
    file_name: String,
    content_type: Option<String>,
    bytes: Bytes,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/parse-resume
///
/// Multipart upload: `resume` (PDF file) and optional `job_description` text.
/// Extraction failure answers 400 but still carries a fallback question set.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, AppError> {
    let pipeline = state.pipeline()?;
    let (upload, job_description) = read_resume_form(multipart?).await?;

    let upload = upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if upload.file_name.trim().is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    if !is_pdf_file_name(&upload.file_name) {
        return Err(AppError::Validation("Invalid file type".to_string()));
    }

    let document = RawDocument::new(
        upload.bytes,
        upload.content_type.unwrap_or_else(|| PDF_MEDIA_TYPE.to_string()),
    )
    .with_file_name(upload.file_name);

    let mut interaction = state.sessions.open_interaction();
    let interaction_id = interaction.id();
    let session = interaction.new_or_reset_session();

    match pipeline.ingest_resume(session, document).await? {
        IngestOutcome::Extracted(profile) => {
            let ats_score = pipeline.score(&job_description);
            let questions = pipeline.generate_questions(session).await?;
            info!(
                "Interaction {interaction_id}: {} questions, ats_score={}, state={:?}",
                questions.len(),
                ats_score.value(),
                session.state()
            );
            Ok(Json(ParseResumeResponse {
                interaction_id,
                resume_data: profile,
                questions,
                ats_score,
            })
            .into_response())
        }
        IngestOutcome::Failed {
            error,
            fallback_questions,
        } => {
            info!(
                "Interaction {interaction_id}: extraction failed, returning {} fallback questions",
                fallback_questions.len()
            );
            let body = Json(json!({
                "interaction_id": interaction_id,
                "error": {
                    "code": "EXTRACTION_FAILED",
                    "message": error
                },
                "questions": fallback_questions
            }));
            Ok((StatusCode::BAD_REQUEST, body).into_response())
        }
    }
}

/// POST /api/evaluate-answer
///
/// Stateless: no session is opened.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    AppJson(request): AppJson<EvaluateAnswerRequest>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    let pipeline = state.pipeline()?;
    let (Some(question), Some(answer)) = (request.question, request.answer) else {
        return Err(AppError::Validation("Missing question or answer".to_string()));
    };

    let feedback = pipeline.evaluate_answer(&question, &answer).await?;
    Ok(Json(EvaluateAnswerResponse { feedback }))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn read_resume_form(
    mut multipart: Multipart,
) -> Result<(Option<ResumeUpload>, String), AppError> {
    let mut upload = None;
    let mut job_description = String::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                upload = Some(ResumeUpload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                job_description = field.text().await?;
            }
            _ => {}
        }
    }

    Ok((upload, job_description))
}

/// Only `.pdf` extensions (any case) are accepted.
fn is_pdf_file_name(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
