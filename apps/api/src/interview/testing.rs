//! Scripted collaborator doubles shared by orchestrator and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::interview::collaborators::{
    AnswerEvaluator, CollaboratorError, QuestionGenerator, ResumeExtractor,
};
use crate::interview::models::{AnswerFeedback, CandidateProfile, InterviewQuestion, RawDocument};

pub fn sample_profile() -> CandidateProfile {
    CandidateProfile::new()
        .with_section("skills", ["Java", "Spring Boot"])
        .with_section("qualifications", ["BSc Computer Science"])
        .with_section("experience", ["Backend engineer at Acme"])
}

pub const GENERIC_QUESTIONS: &[&str] = &[
    "Tell me about yourself.",
    "Describe a challenging project you worked on.",
    "Where do you see yourself in five years?",
];

pub enum ExtractorBehavior {
    Succeed(CandidateProfile),
    Fail(String),
    Panic,
    Hang,
}

pub struct StubExtractor {
    behavior: ExtractorBehavior,
    calls: AtomicUsize,
}

impl StubExtractor {
    pub fn new(behavior: ExtractorBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeExtractor for StubExtractor {
    async fn extract(&self, _document: RawDocument) -> Result<CandidateProfile, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            ExtractorBehavior::Succeed(profile) => Ok(profile.clone()),
            ExtractorBehavior::Fail(msg) => Err(CollaboratorError::Unusable(msg.clone())),
            ExtractorBehavior::Panic => panic!("extractor blew up"),
            ExtractorBehavior::Hang => std::future::pending().await,
        }
    }
}

enum GeneratorMode {
    Normal,
    Failing,
    Empty,
}

/// Tailored questions mention a profile fragment and the call number, so two
/// consecutive generations are distinguishable.
pub struct StubGenerator {
    mode: GeneratorMode,
    calls: AtomicUsize,
    profiled_calls: AtomicUsize,
}

impl StubGenerator {
    fn with_mode(mode: GeneratorMode) -> Self {
        Self {
            mode,
            calls: AtomicUsize::new(0),
            profiled_calls: AtomicUsize::new(0),
        }
    }

    pub fn new() -> Self {
        Self::with_mode(GeneratorMode::Normal)
    }

    pub fn failing() -> Self {
        Self::with_mode(GeneratorMode::Failing)
    }

    pub fn empty() -> Self {
        Self::with_mode(GeneratorMode::Empty)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn profiled_calls(&self) -> usize {
        self.profiled_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionGenerator for StubGenerator {
    async fn generate(
        &self,
        profile: Option<&CandidateProfile>,
    ) -> Result<Vec<InterviewQuestion>, CollaboratorError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        match self.mode {
            GeneratorMode::Failing => {
                return Err(CollaboratorError::Upstream("model unavailable".to_string()))
            }
            GeneratorMode::Empty => return Ok(vec![]),
            GeneratorMode::Normal => {}
        }

        match profile {
            Some(profile) => {
                self.profiled_calls.fetch_add(1, Ordering::SeqCst);
                Ok(profile
                    .sections()
                    .flat_map(|(_, fragments)| fragments.iter())
                    .map(|f| InterviewQuestion::new(format!("[{call}] Tell me about {f}.")))
                    .collect())
            }
            None => Ok(GENERIC_QUESTIONS
                .iter()
                .map(|q| InterviewQuestion::new(*q))
                .collect()),
        }
    }
}

pub struct StubEvaluator {
    failing: bool,
    calls: AtomicUsize,
}

impl StubEvaluator {
    pub fn new() -> Self {
        Self {
            failing: false,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AnswerEvaluator for StubEvaluator {
    async fn evaluate(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerFeedback, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(CollaboratorError::Upstream("evaluator offline".to_string()));
        }
        Ok(AnswerFeedback::new(format!(
            "Feedback on '{question}': the answer '{answer}' is a reasonable start."
        )))
    }
}
