use serde::Serialize;

use crate::interview::models::{CandidateProfile, InterviewQuestion};

/// Where a session stands in the preparation workflow.
///
/// ```text
/// Empty ──ingest ok──▶ Profiled ──questions──▶ Questioned
///   └────ingest err──▶ IngestFailed ──fallback questions──┘
/// ```
///
/// Answer evaluation is stateless and never moves a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    Empty,
    Profiled,
    IngestFailed,
    Questioned,
}

/// One candidate's in-progress preparation workflow.
///
/// Holds the extracted profile XOR the last extraction error, never both.
#[derive(Debug, Default)]
pub struct PreparationSession {
    profile: Option<CandidateProfile>,
    questions: Vec<InterviewQuestion>,
    last_error: Option<String>,
}

impl PreparationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears profile, questions and error. Idempotent.
    pub fn reset(&mut self) {
        self.profile = None;
        self.questions.clear();
        self.last_error = None;
    }

    /// Records the outcome of an extraction: a profile replaces any stored
    /// error, an error replaces any stored profile.
    pub fn ingest(&mut self, outcome: Result<CandidateProfile, String>) {
        match outcome {
            Ok(profile) => {
                self.profile = Some(profile);
                self.last_error = None;
            }
            Err(message) => {
                self.profile = None;
                self.last_error = Some(message);
            }
        }
    }

    pub fn current_profile(&self) -> Option<&CandidateProfile> {
        self.profile.as_ref()
    }

    /// Replaces the question sequence wholesale.
    pub fn set_questions(&mut self, questions: Vec<InterviewQuestion>) {
        self.questions = questions;
    }

    #[allow(dead_code)]
    pub fn questions(&self) -> &[InterviewQuestion] {
        &self.questions
    }

    #[allow(dead_code)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn state(&self) -> SessionState {
        if !self.questions.is_empty() {
            SessionState::Questioned
        } else if self.profile.is_some() {
            SessionState::Profiled
        } else if self.last_error.is_some() {
            SessionState::IngestFailed
        } else {
            SessionState::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> CandidateProfile {
        CandidateProfile::new().with_section("skills", ["Java", "Spring"])
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = PreparationSession::new();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_profile().is_none());
        assert!(session.questions().is_empty());
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = PreparationSession::new();
        session.ingest(Ok(profile()));
        session.set_questions(vec!["Tell me about Spring".into()]);
        session.reset();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.current_profile().is_none());
        assert!(session.questions().is_empty());

        session.ingest(Err("unreadable".to_string()));
        session.reset();
        session.reset();
        assert!(session.last_error().is_none());
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_successful_ingest_is_profiled() {
        let mut session = PreparationSession::new();
        session.ingest(Ok(profile()));
        assert_eq!(session.state(), SessionState::Profiled);
        assert!(session.last_error().is_none());
    }

    #[test]
    fn test_failed_ingest_never_keeps_profile() {
        let mut session = PreparationSession::new();
        session.ingest(Ok(profile()));
        session.ingest(Err("corrupted file".to_string()));
        assert_eq!(session.state(), SessionState::IngestFailed);
        assert!(session.current_profile().is_none());
        assert_eq!(session.last_error(), Some("corrupted file"));

        session.ingest(Ok(profile()));
        assert!(session.last_error().is_none());
        assert_eq!(session.state(), SessionState::Profiled);
    }

    #[test]
    fn test_questions_reachable_from_both_ingest_outcomes() {
        let mut ok = PreparationSession::new();
        ok.ingest(Ok(profile()));
        ok.set_questions(vec!["Q1".into()]);
        assert_eq!(ok.state(), SessionState::Questioned);

        let mut failed = PreparationSession::new();
        failed.ingest(Err("bad".to_string()));
        failed.set_questions(vec!["Generic Q".into()]);
        assert_eq!(failed.state(), SessionState::Questioned);
        assert_eq!(failed.last_error(), Some("bad"));
    }

    #[test]
    fn test_set_questions_replaces_not_appends() {
        let mut session = PreparationSession::new();
        session.set_questions(vec!["A".into(), "B".into()]);
        session.set_questions(vec!["C".into()]);
        assert_eq!(session.questions(), &[InterviewQuestion::new("C")]);
    }
}
