//! PDF rendering: the only place documents are produced.
//!
//! `TextFlow` lays wrapped lines top-down on US letter pages and breaks pages when
//! the bottom margin is reached. `render_resume` and `render_question_sheet` are the
//! two templates built on it.

use anyhow::{Context, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::documents::font_metrics::FontFace;

const PAGE_WIDTH_PT: f32 = 612.0;
const PAGE_HEIGHT_PT: f32 = 792.0;
const LINE_SPACING: f32 = 1.35;

/// Margins and text box for one template.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PageLayout {
    pub fn text_width(&self) -> f32 {
        PAGE_WIDTH_PT - self.left - self.right
    }
}

/// Resume template: text starts at (100, 750).
pub const RESUME_LAYOUT: PageLayout = PageLayout {
    left: 100.0,
    right: 72.0,
    top: 750.0,
    bottom: 50.0,
};

/// Question sheet template: narrow margins, many short lines.
pub const SHEET_LAYOUT: PageLayout = PageLayout {
    left: 30.0,
    right: 30.0,
    top: PAGE_HEIGHT_PT - 40.0,
    bottom: 50.0,
};

pub struct TextFlow {
    layout: PageLayout,
    finished: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    y: f32,
}

impl TextFlow {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            finished: Vec::new(),
            current: Vec::new(),
            y: layout.top,
        }
    }

    /// Writes `text` word-wrapped to the text width. Blank text writes nothing.
    pub fn paragraph(&mut self, face: FontFace, size_pt: f32, text: &str) {
        let max_width_em = self.layout.text_width() / size_pt;
        for line in face.metrics().wrap(text, max_width_em) {
            self.line(face, size_pt, &line);
        }
    }

    /// Writes a labelled paragraph: bold label on its own line, body below.
    pub fn section(&mut self, label: &str, body: &str) {
        if body.trim().is_empty() {
            return;
        }
        self.paragraph(FontFace::HelveticaBold, 12.0, label);
        self.paragraph(FontFace::Helvetica, 11.0, body);
        self.gap(8.0);
    }

    pub fn gap(&mut self, points: f32) {
        self.y -= points;
    }

    #[cfg(test)]
    pub fn page_count(&self) -> usize {
        self.finished.len() + 1
    }

    fn line(&mut self, face: FontFace, size_pt: f32, text: &str) {
        if self.y < self.layout.bottom {
            self.finished.push(std::mem::take(&mut self.current));
            self.y = self.layout.top;
        }
        let ops = &mut self.current;
        ops.push(Operation::new("BT", vec![]));
        ops.push(Operation::new(
            "Tf",
            vec![face.resource_name().into(), size_pt.into()],
        ));
        ops.push(Operation::new(
            "Td",
            vec![self.layout.left.into(), self.y.into()],
        ));
        ops.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(text))],
        ));
        ops.push(Operation::new("ET", vec![]));
        self.y -= size_pt * LINE_SPACING;
    }

    /// Serializes all pages into a PDF byte buffer.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        self.finished.push(self.current);
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut fonts = lopdf::Dictionary::new();
        for face in [FontFace::Helvetica, FontFace::HelveticaBold] {
            let font_id = doc.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = doc.add_object(dictionary! { "Font" => fonts });

        let mut kids: Vec<Object> = Vec::with_capacity(self.finished.len());
        for operations in self.finished {
            let content = Content { operations }
                .encode()
                .context("Failed to encode page content")?;
            let content_id = doc.add_object(Stream::new(dictionary! {}, content));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
                "Resources" => resources_id,
                "MediaBox" => vec![0.0_f32.into(), 0.0_f32.into(), PAGE_WIDTH_PT.into(), PAGE_HEIGHT_PT.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut buffer = Vec::new();
        doc.save_to(&mut buffer)
            .context("Failed to serialize PDF document")?;
        Ok(buffer)
    }
}

/// Maps text onto single-byte WinAnsi codes; characters outside Latin-1 become '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => b'\'',
            '\u{201C}' | '\u{201D}' => b'"',
            '\u{2013}' | '\u{2014}' => b'-',
            c if (c as u32) < 0x100 && !c.is_control() => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Templates
// ────────────────────────────────────────────────────────────────────────────

/// Content of the one-page resume template. Optional sections are skipped when blank.
#[derive(Debug, Clone, Default)]
pub struct ResumeContent {
    pub name: String,
    pub skills: String,
    pub qualification: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub experience: Option<String>,
    pub certifications: Option<String>,
    pub education: Option<String>,
}

pub fn render_resume(content: &ResumeContent) -> Result<Vec<u8>> {
    let mut flow = TextFlow::new(RESUME_LAYOUT);
    flow.paragraph(
        FontFace::HelveticaBold,
        16.0,
        &format!("Name: {}", content.name),
    );

    let contact: Vec<&str> = [content.email.as_deref(), content.phone.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    if !contact.is_empty() {
        flow.paragraph(FontFace::Helvetica, 11.0, &contact.join("  |  "));
    }
    flow.gap(6.0);

    flow.paragraph(
        FontFace::Helvetica,
        12.0,
        &format!("Skills: {}", content.skills),
    );
    flow.paragraph(
        FontFace::Helvetica,
        12.0,
        &format!("Qualifications: {}", content.qualification),
    );
    flow.gap(10.0);

    for (label, body) in [
        ("Experience", &content.experience),
        ("Certifications", &content.certifications),
        ("Education", &content.education),
    ] {
        if let Some(body) = body {
            flow.section(label, body);
        }
    }

    flow.finish()
}

/// Renders titled groups of questions, one group per heading.
pub fn render_question_sheet(title: &str, groups: &[(&str, &[&str])]) -> Result<Vec<u8>> {
    let mut flow = TextFlow::new(SHEET_LAYOUT);
    flow.paragraph(FontFace::HelveticaBold, 14.0, title);
    flow.gap(6.0);

    for (heading, questions) in groups {
        flow.paragraph(FontFace::HelveticaBold, 12.0, heading);
        for (i, question) in questions.iter().enumerate() {
            flow.paragraph(FontFace::Helvetica, 10.0, &format!("{}. {question}", i + 1));
        }
        flow.gap(14.0);
    }

    flow.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_text(pdf: &[u8], page_number: u32) -> String {
        let doc = Document::load_mem(pdf).unwrap();
        let pages = doc.get_pages();
        let page_id = pages[&page_number];
        String::from_utf8_lossy(&doc.get_page_content(page_id).unwrap()).into_owned()
    }

    fn sample_resume() -> ResumeContent {
        ResumeContent {
            name: "Jane Doe".to_string(),
            skills: "Java, Spring Boot, React".to_string(),
            qualification: "BSc Computer Science".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_resume_is_a_single_page_pdf() {
        let pdf = render_resume(&sample_resume()).unwrap();
        assert!(pdf.starts_with(b"%PDF-1.5"));
        let doc = Document::load_mem(&pdf).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_resume_contains_required_fields() {
        let pdf = render_resume(&sample_resume()).unwrap();
        let text = page_text(&pdf, 1);
        assert!(text.contains("Name: Jane Doe"));
        assert!(text.contains("Skills: Java, Spring Boot, React"));
        assert!(text.contains("Qualifications: BSc Computer Science"));
    }

    #[test]
    fn test_resume_optional_sections_rendered_when_present() {
        let content = ResumeContent {
            email: Some("jane@example.com".to_string()),
            experience: Some("Backend engineer at Acme".to_string()),
            education: Some("   ".to_string()),
            ..sample_resume()
        };
        let text = page_text(&render_resume(&content).unwrap(), 1);
        assert!(text.contains("jane@example.com"));
        assert!(text.contains("Backend engineer at Acme"));
        assert!(!text.contains("Education"));
    }

    #[test]
    fn test_question_sheet_paginates() {
        let questions: Vec<String> = (0..120).map(|i| format!("Question number {i}?")).collect();
        let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
        let pdf = render_question_sheet("Coding Questions", &[("Python Questions", refs.as_slice())]).unwrap();
        let doc = Document::load_mem(&pdf).unwrap();
        assert!(doc.get_pages().len() > 1);
        assert!(page_text(&pdf, 1).contains("1. Question number 0?"));
    }

    #[test]
    fn test_flow_starts_new_page_at_bottom_margin() {
        let mut flow = TextFlow::new(RESUME_LAYOUT);
        for _ in 0..200 {
            flow.paragraph(FontFace::Helvetica, 12.0, "line");
        }
        assert!(flow.page_count() > 1);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(encode_win_ansi("café"), vec![b'c', b'a', b'f', 0xE9]);
        assert_eq!(encode_win_ansi("it\u{2019}s"), b"it's".to_vec());
        assert_eq!(encode_win_ansi("日本"), b"??".to_vec());
    }
}
