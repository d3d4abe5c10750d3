// Prompt templates for the three LLM-backed collaborators.
// Placeholders in braces are substituted with `str::replace` before the call.

pub const EXTRACTION_SYSTEM: &str = "You extract structured data from resumes. \
    You MUST respond with valid JSON only, with no text outside the JSON object.";

pub const EXTRACTION_PROMPT: &str = r#"Extract the candidate's resume into named sections.

Return JSON of exactly this shape:
{
  "sections": {
    "skills": ["..."],
    "qualifications": ["..."],
    "experience": ["..."],
    "projects": ["..."],
    "certifications": ["..."]
  }
}

Rules:
- Only include sections that appear in the resume. Omit empty sections.
- Each fragment is a short phrase copied or condensed from the resume. Do not invent details.
- If the text is not a resume, return {"error": "<one sentence explaining why>"} instead.

Resume text:
"""
{resume_text}
""""#;

pub const QUESTIONS_PROMPT: &str = r#"Write {count} interview questions for the candidate below.
Ground each question in a specific skill, qualification or experience from the profile.
Mix technical depth questions with behavioural questions about their experience.

Candidate profile:
{profile}

Return JSON: {"questions": ["...", "..."]}"#;

pub const FALLBACK_QUESTIONS_PROMPT: &str = r#"The candidate's resume could not be read.
Write {count} general interview questions suitable for a software engineering candidate
of unknown background: motivation, teamwork, problem solving and core programming concepts.

Return JSON: {"questions": ["...", "..."]}"#;

pub const EVALUATION_PROMPT: &str = r#"Evaluate the candidate's answer to an interview question.

Question: {question}
Answer: {answer}

Give concise feedback in plain text (no markdown headings): what was good, what was missing
or incorrect, and one concrete suggestion to improve the answer. Keep it under 150 words."#;
