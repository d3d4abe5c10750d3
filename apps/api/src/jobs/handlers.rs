use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobDetailsQuery {
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    pub location: Option<String>,
}

/// GET /api/job-details?jobTitle=...&location=...
pub async fn handle_job_details(
    State(state): State<AppState>,
    Query(params): Query<JobDetailsQuery>,
) -> Result<Json<serde_json::Value>, AppError> {
    let job_title = params
        .job_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Job title is required".to_string()))?;
    let location = params.location.as_deref().map(str::trim).unwrap_or_default();

    let jobs = state.jobs()?;
    let listings = jobs.search(job_title, location).await?;
    Ok(Json(listings))
}
