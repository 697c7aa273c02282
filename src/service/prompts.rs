//! Prompt templates for the Gemini backend

use crate::pipeline::keywords::KeywordSet;

/// Prompt templates used for the two backend calls.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub keyword_extraction: String,
    pub soft_match: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            keyword_extraction: KEYWORD_EXTRACTION_TEMPLATE.to_string(),
            soft_match: SOFT_MATCH_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    pub fn render_keyword_extraction(&self, text: &str) -> String {
        self.keyword_extraction.replace("{text}", text)
    }

    pub fn render_soft_match(&self, resume: &KeywordSet, job: &KeywordSet) -> String {
        let resume_list = serde_json::to_string(resume.as_slice()).unwrap_or_default();
        let job_list = serde_json::to_string(job.as_slice()).unwrap_or_default();
        self.soft_match
            .replace("{resume_keywords}", &resume_list)
            .replace("{job_keywords}", &job_list)
    }
}

const KEYWORD_EXTRACTION_TEMPLATE: &str = r#"Extract important keywords (skills, technologies, tools, soft skills) from the following text.
Return them as a JSON array of strings without duplicates.

Text: {text}"#;

const SOFT_MATCH_TEMPLATE: &str = r#"Compare these two keyword lists and find pairs that are semantically related but not identical strings (for example "Node" and "Node.js", or "ML" and "Machine Learning").

Resume keywords: {resume_keywords}
Job keywords: {job_keywords}

Return a JSON array of objects with this exact shape, and nothing else:
[{"resume_keyword": "...", "job_keyword": "...", "confidence": 0.0}]

Each resume_keyword must come from the resume list and each job_keyword from the job list. Confidence is a number between 0 and 1."#;
