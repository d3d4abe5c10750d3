//! Axum route handlers for document generation.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::documents::{render_resume, ResumeContent};
use crate::errors::{AppError, AppJson};

/// A form value sent either as free text or as a list of items.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl TextOrList {
    fn into_text(self) -> String {
        match self {
            TextOrList::Text(s) => s.trim().to_string(),
            TextOrList::List(items) => items
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateResumeRequest {
    pub name: Option<String>,
    pub skills: Option<TextOrList>,
    pub qualification: Option<TextOrList>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<TextOrList>,
    pub certifications: Option<TextOrList>,
    pub education: Option<TextOrList>,
}

impl GenerateResumeRequest {
    /// Checks required fields in order and reports the first one missing or blank.
    fn into_content(self) -> Result<ResumeContent, AppError> {
        let name = required("name", self.name.map(|n| n.trim().to_string()))?;
        let skills = required("skills", self.skills.map(TextOrList::into_text))?;
        let qualification = required(
            "qualification",
            self.qualification.map(TextOrList::into_text),
        )?;

        Ok(ResumeContent {
            name,
            skills,
            qualification,
            email: self.email,
            phone: self.phone,
            experience: self.experience.map(TextOrList::into_text),
            certifications: self.certifications.map(TextOrList::into_text),
            education: self.education.map(TextOrList::into_text),
        })
    }
}

fn required(field: &str, value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::Validation(format!("Missing {field} field")))
}

/// Wraps rendered PDF bytes as a download.
pub fn pdf_attachment(file_name: &str, bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}

/// POST /api/generate-resume
///
/// Renders the submitted fields into a one-page PDF resume.
pub async fn handle_generate_resume(
    AppJson(request): AppJson<GenerateResumeRequest>,
) -> Result<Response, AppError> {
    let content = request.into_content()?;
    let pdf = render_resume(&content)?;
    info!("Rendered resume PDF ({} bytes)", pdf.len());
    Ok(pdf_attachment("resume.pdf", pdf))
}
