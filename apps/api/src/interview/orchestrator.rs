//! Pipeline Orchestrator: drives a `PreparationSession` through ingest, scoring,
//! question generation and answer evaluation.
//!
//! Flow: reset → extract → (profile | error + fallback questions) → score → generate → evaluate.
//!
//! The orchestrator is stateless and shared across requests; all per-candidate state
//! lives in the session the caller passes in. Each collaborator call runs on its own
//! Tokio task bounded by a timeout, so a panic or a hung upstream is reported as a
//! collaborator failure instead of taking the request down. No locks are held and
//! nothing is retried here.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::interview::collaborators::{
    AnswerEvaluator, CollaboratorError, QuestionGenerator, ResumeExtractor,
};
use crate::interview::models::{
    AnswerFeedback, CandidateProfile, FitScore, InterviewQuestion, RawDocument,
};
use crate::interview::scoring::ScoringPolicy;
use crate::interview::session::PreparationSession;

/// Message reported for extraction failures that carry no user-facing detail.
const GENERIC_EXTRACTION_ERROR: &str = "Failed to extract data from the uploaded resume";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Validation(String),

    #[error("question generation failed: {0}")]
    Generation(CollaboratorError),

    #[error("answer evaluation failed: {0}")]
    Evaluation(CollaboratorError),
}

/// Result of `ingest_resume`. Extraction failure is not a dead end: the caller
/// still receives a generic question set.
#[derive(Debug, Clone)]
pub enum IngestOutcome {
    Extracted(CandidateProfile),
    Failed {
        error: String,
        fallback_questions: Vec<InterviewQuestion>,
    },
}

pub struct PipelineOrchestrator {
    extractor: Arc<dyn ResumeExtractor>,
    generator: Arc<dyn QuestionGenerator>,
    evaluator: Arc<dyn AnswerEvaluator>,
    scoring: Arc<ScoringPolicy>,
    timeout: Duration,
}

impl PipelineOrchestrator {
    pub fn new(
        extractor: Arc<dyn ResumeExtractor>,
        generator: Arc<dyn QuestionGenerator>,
        evaluator: Arc<dyn AnswerEvaluator>,
        scoring: Arc<ScoringPolicy>,
        timeout: Duration,
    ) -> Self {
        Self {
            extractor,
            generator,
            evaluator,
            scoring,
            timeout,
        }
    }

    /// Resets the session and extracts a profile from `document`.
    ///
    /// On failure the error is stored on the session and fallback questions are
    /// generated against the absent profile. Only a failure of that fallback
    /// generation is returned as `Err`.
    pub async fn ingest_resume(
        &self,
        session: &mut PreparationSession,
        document: RawDocument,
    ) -> Result<IngestOutcome, PipelineError> {
        session.reset();
        info!(
            "Ingesting resume ({} bytes, {})",
            document.byte_len(),
            document.media_type
        );

        let extractor = Arc::clone(&self.extractor);
        let extracted = self
            .run_guarded("extraction", async move { extractor.extract(document).await })
            .await;

        match extracted {
            Ok(profile) => {
                info!(
                    "Resume extracted: {} sections",
                    profile.sections().count()
                );
                session.ingest(Ok(profile.clone()));
                Ok(IngestOutcome::Extracted(profile))
            }
            Err(e) => {
                let message = extraction_message(&e);
                warn!("Resume extraction failed: {e}; generating fallback questions");
                session.ingest(Err(message.clone()));
                let fallback_questions = self.generate_questions(session).await?;
                Ok(IngestOutcome::Failed {
                    error: message,
                    fallback_questions,
                })
            }
        }
    }

    /// Applies the scoring policy. Independent of any session.
    pub fn score(&self, job_description: &str) -> FitScore {
        self.scoring.score(job_description)
    }

    /// Generates questions from the session's current profile (which may be absent)
    /// and stores them on the session, replacing any previous set.
    pub async fn generate_questions(
        &self,
        session: &mut PreparationSession,
    ) -> Result<Vec<InterviewQuestion>, PipelineError> {
        let generator = Arc::clone(&self.generator);
        let profile = session.current_profile().cloned();
        let tailored = profile.is_some();

        let questions = self
            .run_guarded("generation", async move {
                generator.generate(profile.as_ref()).await
            })
            .await
            .map_err(PipelineError::Generation)?;

        if questions.is_empty() {
            return Err(PipelineError::Generation(CollaboratorError::Unusable(
                "generator returned no questions".to_string(),
            )));
        }

        info!(
            "Generated {} {} questions",
            questions.len(),
            if tailored { "tailored" } else { "fallback" }
        );
        debug!("First question: {}", questions[0].prompt());
        session.set_questions(questions.clone());
        Ok(questions)
    }

    /// Evaluates one answer. Empty input is rejected before the evaluator is called.
    pub async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerFeedback, PipelineError> {
        if question.trim().is_empty() {
            return Err(PipelineError::Validation(
                "question must not be empty".to_string(),
            ));
        }
        if answer.trim().is_empty() {
            return Err(PipelineError::Validation(
                "answer must not be empty".to_string(),
            ));
        }

        let evaluator = Arc::clone(&self.evaluator);
        let question = question.to_string();
        let answer = answer.to_string();
        self.run_guarded("evaluation", async move {
            evaluator.evaluate(&question, &answer).await
        })
        .await
        .map_err(PipelineError::Evaluation)
    }

    /// Runs one collaborator call on its own task under the configured timeout.
    async fn run_guarded<T, F>(&self, stage: &'static str, call: F) -> Result<T, CollaboratorError>
    where
        T: Send + 'static,
        F: Future<Output = Result<T, CollaboratorError>> + Send + 'static,
    {
        let started = Instant::now();
        let mut task = tokio::spawn(call);

        let result = match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => {
                error!("{stage} collaborator task failed: {join_err}");
                Err(CollaboratorError::Crashed(join_err.to_string()))
            }
            Err(_) => {
                task.abort();
                warn!(
                    "{stage} collaborator timed out after {}s",
                    self.timeout.as_secs()
                );
                Err(CollaboratorError::TimedOut(self.timeout.as_secs()))
            }
        };

        debug!(
            "{stage} collaborator finished in {}ms",
            started.elapsed().as_millis()
        );
        result
    }
}

/// Unusable documents keep their specific message; crashes, timeouts and upstream
/// failures are reported generically.
fn extraction_message(err: &CollaboratorError) -> String {
    match err {
        CollaboratorError::Unusable(msg) => msg.clone(),
        _ => GENERIC_EXTRACTION_ERROR.to_string(),
    }
}
