//! Collaborator seams: the three external services the preparation pipeline drives.
//!
//! The orchestrator only sees these traits. Production implementations live in
//! `llm_collaborators.rs`; tests use the scripted doubles in `interview::testing`.
//! All implementations must be stateless: every input arrives as an argument.

use async_trait::async_trait;
use thiserror::Error;

use crate::interview::models::{AnswerFeedback, CandidateProfile, InterviewQuestion, RawDocument};

#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The collaborator ran but its output cannot be used (unreadable document,
    /// malformed model output, empty result).
    #[error("{0}")]
    Unusable(String),

    #[error("upstream service failed: {0}")]
    Upstream(String),

    #[error("collaborator did not respond within {0}s")]
    TimedOut(u64),

    #[error("collaborator crashed: {0}")]
    Crashed(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Turns raw resume bytes into a structured profile.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, document: RawDocument) -> Result<CandidateProfile, CollaboratorError>;
}

/// Produces interview questions for a profile, or a generic set when `profile` is `None`.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        profile: Option<&CandidateProfile>,
    ) -> Result<Vec<InterviewQuestion>, CollaboratorError>;
}

/// Critiques one answer to one question.
#[async_trait]
pub trait AnswerEvaluator: Send + Sync {
    async fn evaluate(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerFeedback, CollaboratorError>;
}
