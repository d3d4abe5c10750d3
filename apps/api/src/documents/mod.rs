// Document generation: resume printouts and question sheets rendered to PDF.
// Pure formatting, no decision logic.

pub mod font_metrics;
pub mod handlers;
pub mod render;

pub use render::{render_question_sheet, render_resume, ResumeContent};
