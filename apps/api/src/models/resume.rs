use serde::{Deserialize, Serialize};

use crate::models::candidate::{EducationLevel, ExperienceLevel};

/// Structured fields pulled out of a résumé document.
///
/// Every field is reported independently: a field that could not be found is
/// an empty string, never an error for the whole extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedResumeData {
    pub skills: Vec<String>,
    pub education: String,
    pub experience: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience_level: ExperienceLevel,
    pub education_level: EducationLevel,
}

impl ExtractedResumeData {
    /// Result for a document that yielded no text at all.
    pub fn empty() -> Self {
        ExtractedResumeData {
            skills: vec![],
            education: String::new(),
            experience: String::new(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            experience_level: ExperienceLevel::Beginner,
            education_level: EducationLevel::Graduate,
        }
    }
}
