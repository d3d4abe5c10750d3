//! Question Bank: fixed per-language practice questions.
//!
//! Pure lookup, no collaborators. Language keys are trimmed and matched
//! case-insensitively against the supported set.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

mod data;
pub mod handlers;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    C,
    Cpp,
    Java,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::Python, Language::C, Language::Cpp, Language::Java];

    pub fn key(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::C => "c",
            Language::Cpp => "cpp",
            Language::Java => "java",
        }
    }

    /// Display name used in rendered question sheets.
    pub fn title(self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::C => "C",
            Language::Cpp => "C++",
            Language::Java => "Java",
        }
    }

    pub fn questions(self) -> &'static [&'static str] {
        match self {
            Language::Python => data::PYTHON_QUESTIONS,
            Language::C => data::C_QUESTIONS,
            Language::Cpp => data::CPP_QUESTIONS,
            Language::Java => data::JAVA_QUESTIONS,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No questions available for language: {}", self.0)
    }
}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key() == key)
            .ok_or(UnsupportedLanguage(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_25_questions() {
        for lang in Language::ALL {
            assert_eq!(lang.questions().len(), 25, "{lang} bank size");
        }
    }

    #[test]
    fn test_python_bank_order_is_fixed() {
        let questions = Language::Python.questions();
        assert_eq!(questions[0], "What is Python?");
        assert_eq!(
            questions[24],
            "What is the difference between Python 2 and Python 3?"
        );
    }

    #[test]
    fn test_parse_is_case_and_whitespace_insensitive() {
        assert_eq!(" Python ".parse::<Language>(), Ok(Language::Python));
        assert_eq!("CPP".parse::<Language>(), Ok(Language::Cpp));
        assert_eq!("c".parse::<Language>(), Ok(Language::C));
    }

    #[test]
    fn test_unsupported_language_message() {
        let err = "ruby".parse::<Language>().unwrap_err();
        assert_eq!(err.to_string(), "No questions available for language: ruby");
    }
}
