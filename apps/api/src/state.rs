use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppError;
use crate::interview::{PipelineOrchestrator, SessionLifecycleManager};
use crate::jobs::JobListingClient;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Holds only stateless services; per-candidate state lives in interactions
/// opened from `sessions` for the duration of one request.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// `None` when the LLM credential was missing at start-up.
    pub pipeline: Option<Arc<PipelineOrchestrator>>,
    pub sessions: SessionLifecycleManager,
    /// `None` when the job-listing credentials were missing at start-up.
    pub jobs: Option<JobListingClient>,
}

impl AppState {
    pub fn pipeline(&self) -> Result<&PipelineOrchestrator, AppError> {
        self.pipeline
            .as_deref()
            .ok_or_else(|| AppError::ServiceUnavailable("Model initialization failed".to_string()))
    }

    pub fn jobs(&self) -> Result<&JobListingClient, AppError> {
        self.jobs.as_ref().ok_or_else(|| {
            AppError::ServiceUnavailable("Job listing service is not configured".to_string())
        })
    }
}
