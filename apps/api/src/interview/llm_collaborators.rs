//! LLM-backed collaborators: PDF resume extraction, question generation and
//! answer evaluation. All model calls go through `LlmClient`.

use std::collections::BTreeMap;
use std::io::Write;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::interview::collaborators::{
    AnswerEvaluator, CollaboratorError, QuestionGenerator, ResumeExtractor,
};
use crate::interview::models::{AnswerFeedback, CandidateProfile, InterviewQuestion, RawDocument};
use crate::interview::prompts::{
    EVALUATION_PROMPT, EXTRACTION_PROMPT, EXTRACTION_SYSTEM, FALLBACK_QUESTIONS_PROMPT,
    QUESTIONS_PROMPT,
};
use crate::llm_client::prompts::{INTERVIEWER_PERSONA, JSON_ONLY_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};

/// Resume text beyond this many characters is not sent to the model.
const MAX_RESUME_CHARS: usize = 20_000;
/// Upper bound on questions kept from one generation.
const MAX_QUESTIONS: usize = 10;

fn llm_failure(err: LlmError) -> CollaboratorError {
    match err {
        LlmError::Parse(e) => CollaboratorError::Unusable(format!("model returned malformed output: {e}")),
        LlmError::EmptyContent => CollaboratorError::Unusable("model returned no content".to_string()),
        other => CollaboratorError::Upstream(other.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Extraction
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ExtractionReply {
    #[serde(default)]
    sections: BTreeMap<String, Vec<String>>,
    error: Option<String>,
}

/// Reads text out of a PDF resume and asks the model to split it into sections.
pub struct PdfResumeExtractor {
    llm: LlmClient,
}

impl PdfResumeExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeExtractor for PdfResumeExtractor {
    async fn extract(&self, document: RawDocument) -> Result<CandidateProfile, CollaboratorError> {
        if !document.bytes.starts_with(b"%PDF") {
            return Err(CollaboratorError::Unusable(
                "The uploaded file is not a readable PDF document".to_string(),
            ));
        }

        // pdf-extract is synchronous and may panic on malformed input.
        let bytes = document.bytes;
        let text = tokio::task::spawn_blocking(move || read_pdf_text(&bytes))
            .await
            .map_err(|e| CollaboratorError::Crashed(format!("PDF text extraction failed: {e}")))??;

        let text = normalize_whitespace(&text);
        if text.is_empty() {
            return Err(CollaboratorError::Unusable(
                "No text could be extracted from the resume".to_string(),
            ));
        }
        let text = truncate_chars(&text, MAX_RESUME_CHARS);
        debug!("Extracted {} characters of resume text", text.len());

        let prompt = EXTRACTION_PROMPT.replace("{resume_text}", text);
        let reply: ExtractionReply = self
            .llm
            .call_json(&prompt, EXTRACTION_SYSTEM)
            .await
            .map_err(llm_failure)?;

        profile_from_reply(reply)
    }
}

/// Spools the upload to a temporary file for `pdf-extract`; the file is removed
/// when the spool drops, whether or not extraction succeeded.
fn read_pdf_text(bytes: &[u8]) -> Result<String, CollaboratorError> {
    let mut spool = tempfile::Builder::new()
        .prefix("resume-")
        .suffix(".pdf")
        .tempfile()?;
    spool.write_all(bytes)?;
    spool.flush()?;

    pdf_extract::extract_text(spool.path())
        .map_err(|e| CollaboratorError::Unusable(format!("Could not read the PDF: {e}")))
}

fn profile_from_reply(reply: ExtractionReply) -> Result<CandidateProfile, CollaboratorError> {
    if let Some(error) = reply.error.filter(|e| !e.trim().is_empty()) {
        return Err(CollaboratorError::Unusable(error));
    }
    let mut profile = CandidateProfile::new();
    for (section, fragments) in reply.sections {
        profile.insert_section(&section, fragments);
    }
    if profile.is_empty() {
        return Err(CollaboratorError::Unusable(
            "No resume sections could be identified".to_string(),
        ));
    }
    info!("Extracted profile sections: {}", profile.sections().count());
    Ok(profile)
}

fn normalize_whitespace(text: &str) -> String {
    text.lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Question generation
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct QuestionsReply {
    questions: Vec<String>,
}

pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(
        &self,
        profile: Option<&CandidateProfile>,
    ) -> Result<Vec<InterviewQuestion>, CollaboratorError> {
        let count = MAX_QUESTIONS.to_string();
        let prompt = match profile {
            Some(profile) => QUESTIONS_PROMPT
                .replace("{count}", &count)
                .replace("{profile}", &profile.to_prompt_text()),
            None => FALLBACK_QUESTIONS_PROMPT.replace("{count}", &count),
        };
        let system = format!("{INTERVIEWER_PERSONA} {JSON_ONLY_SYSTEM}");

        let reply: QuestionsReply = self
            .llm
            .call_json(&prompt, &system)
            .await
            .map_err(llm_failure)?;

        Ok(clean_questions(reply.questions))
    }
}

/// Trims, drops blanks and duplicates, keeps the model's order, caps the count.
fn clean_questions(raw: Vec<String>) -> Vec<InterviewQuestion> {
    let mut seen = std::collections::HashSet::new();
    raw.into_iter()
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .filter(|q| seen.insert(q.to_lowercase()))
        .take(MAX_QUESTIONS)
        .map(InterviewQuestion::new)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Answer evaluation
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAnswerEvaluator {
    llm: LlmClient,
}

impl LlmAnswerEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl AnswerEvaluator for LlmAnswerEvaluator {
    async fn evaluate(
        &self,
        question: &str,
        answer: &str,
    ) -> Result<AnswerFeedback, CollaboratorError> {
        let prompt = EVALUATION_PROMPT
            .replace("{question}", question)
            .replace("{answer}", answer);

        let text = self
            .llm
            .call_text(&prompt, INTERVIEWER_PERSONA)
            .await
            .map_err(llm_failure)?;

        Ok(AnswerFeedback::new(text))
    }
}
