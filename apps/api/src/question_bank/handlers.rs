//! Axum route handlers for the practice question bank.

use axum::{response::Response, Json};
use serde::{Deserialize, Serialize};

use crate::documents::handlers::pdf_attachment;
use crate::documents::render_question_sheet;
use crate::errors::{AppError, AppJson};
use crate::question_bank::Language;

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub language: Language,
    pub questions: &'static [&'static str],
}

impl QuestionsRequest {
    fn language(&self) -> Result<Language, AppError> {
        let raw = self
            .language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .ok_or_else(|| AppError::Validation("Language is required".to_string()))?;
        raw.parse::<Language>()
            .map_err(|e| AppError::NotFound(e.to_string()))
    }
}

/// POST /api/questions
pub async fn handle_questions(
    AppJson(request): AppJson<QuestionsRequest>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let language = request.language()?;
    Ok(Json(QuestionsResponse {
        language,
        questions: language.questions(),
    }))
}

/// POST /api/questions/pdf
///
/// Same lookup as `/api/questions`, rendered as a printable sheet.
pub async fn handle_questions_pdf(
    AppJson(request): AppJson<QuestionsRequest>,
) -> Result<Response, AppError> {
    let language = request.language()?;
    let heading = format!("{} Questions", language.title());
    let pdf = render_question_sheet(
        "Coding Interview Questions",
        &[(heading.as_str(), language.questions())],
    )?;
    Ok(pdf_attachment(&format!("{}_questions.pdf", language.key()), pdf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(language: Option<&str>) -> QuestionsRequest {
        QuestionsRequest {
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_missing_language_is_validation_error() {
        assert!(matches!(req(None).language(), Err(AppError::Validation(_))));
        assert!(matches!(req(Some(" ")).language(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unsupported_language_is_not_found() {
        match req(Some("ruby")).language() {
            Err(AppError::NotFound(msg)) => assert!(msg.contains("ruby")),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_python_returns_full_bank() {
        let Json(response) = handle_questions(AppJson(req(Some("python")))).await.unwrap();
        assert_eq!(response.questions.len(), 25);
        assert_eq!(response.language, Language::Python);
    }
}
