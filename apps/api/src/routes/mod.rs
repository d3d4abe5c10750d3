pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::documents::handlers as documents;
use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::question_bank::handlers as question_bank;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Preparation pipeline
        .route(
            "/api/parse-resume",
            post(interview::handle_parse_resume).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/evaluate-answer", post(interview::handle_evaluate_answer))
        // Lookup and document glue
        .route("/api/questions", post(question_bank::handle_questions))
        .route("/api/questions/pdf", post(question_bank::handle_questions_pdf))
        .route("/api/generate-resume", post(documents::handle_generate_resume))
        .route("/api/job-details", get(jobs::handle_job_details))
        .with_state(state)
}
