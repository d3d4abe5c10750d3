use std::collections::BTreeMap;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// An uploaded resume as handed to the extraction collaborator.
///
/// Moved into the extraction call and dropped when it returns, so the bytes
/// never outlive a single ingest.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub bytes: Bytes,
    pub media_type: String,
    pub file_name: Option<String>,
}

impl RawDocument {
    pub fn new(bytes: impl Into<Bytes>, media_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            media_type: media_type.into(),
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

/// Structured result of resume extraction: section name → text fragments.
///
/// Section names are normalised to lowercase snake_case; sections with no
/// non-blank fragment are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateProfile {
    sections: BTreeMap<String, Vec<String>>,
}

impl CandidateProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds fragments under `section`, appending to anything already there.
    #[cfg(test)]
    pub fn with_section<I, S>(mut self, section: &str, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_section(section, fragments);
        self
    }

    pub fn insert_section<I, S>(&mut self, section: &str, fragments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = normalize_section_name(section);
        if key.is_empty() {
            return;
        }
        let fragments: Vec<String> = fragments
            .into_iter()
            .map(|f| {
                let f: String = f.into();
                f.trim().to_string()
            })
            .filter(|f| !f.is_empty())
            .collect();
        if fragments.is_empty() {
            return;
        }
        self.sections.entry(key).or_default().extend(fragments);
    }

    #[cfg(test)]
    pub fn section(&self, name: &str) -> Option<&[String]> {
        self.sections
            .get(&normalize_section_name(name))
            .map(Vec::as_slice)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.sections
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Renders the profile as plain text for prompt construction.
    pub fn to_prompt_text(&self) -> String {
        let mut out = String::new();
        for (section, fragments) in &self.sections {
            out.push_str(section);
            out.push_str(":\n");
            for fragment in fragments {
                out.push_str("- ");
                out.push_str(fragment);
                out.push('\n');
            }
        }
        out
    }
}

fn normalize_section_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// A single interview prompt. Its position in the sequence is its order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewQuestion(String);

impl InterviewQuestion {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self(prompt.into())
    }

    pub fn prompt(&self) -> &str {
        &self.0
    }
}

impl From<&str> for InterviewQuestion {
    fn from(prompt: &str) -> Self {
        Self::new(prompt)
    }
}

/// Free-text critique of one (question, answer) pair. Never stored on a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerFeedback(String);

impl AnswerFeedback {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Keyword fit between a job description and the candidate, in `0..=100`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FitScore(u8);

impl FitScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}
