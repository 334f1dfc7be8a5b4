//! Résumé understanding: document text extraction, skill recognition and
//! field extraction, behind one [`ResumeParser`] facade.

pub mod fields;
pub mod handlers;
pub mod normalize;
pub mod skills;
pub mod text_extractor;
pub mod upload;

use std::path::Path;

use tracing::info;

use crate::models::resume::ExtractedResumeData;
use crate::resume::fields::extract_fields;
use crate::resume::skills::SkillRecognizer;
use crate::resume::text_extractor::extract_text;

/// Built once at startup from the canonical skill list; shared read-only
/// across requests.
pub struct ResumeParser {
    recognizer: SkillRecognizer,
}

impl ResumeParser {
    pub fn new(catalog_skills: &[String]) -> Self {
        info!(
            "Resume parser ready ({} canonical skills)",
            catalog_skills.len()
        );
        ResumeParser {
            recognizer: SkillRecognizer::new(catalog_skills),
        }
    }

    /// Every field of the document at `path`. Unreadable documents give
    /// [`ExtractedResumeData::empty`].
    pub fn extract_resume_data(&self, path: &Path) -> ExtractedResumeData {
        self.extract_from_text(&extract_text(path))
    }

    /// Only the skills of the document at `path`.
    pub fn extract_skills(&self, path: &Path) -> Vec<String> {
        self.recognizer.recognize(&extract_text(path))
    }

    pub fn extract_from_text(&self, text: &str) -> ExtractedResumeData {
        extract_fields(text, &self.recognizer)
    }
}
