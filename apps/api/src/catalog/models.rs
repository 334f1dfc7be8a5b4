use serde::{Deserialize, Deserializer, Serialize};

use crate::models::candidate::{EducationLevel, ExperienceLevel};

/// One internship opportunity from the catalog. Read-only once loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InternshipPosting {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub description: String,
    /// Matches a [`SectorDefinition::id`], compared case-insensitively.
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub remote_work: bool,
    #[serde(default)]
    pub education_level: EducationLevel,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default, deserialize_with = "string_or_number")]
    pub stipend: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub duration: String,
}

/// A sector as registered in `sectors.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectorDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ordered keywords used for partial sector-interest credit.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Accepts `"6 months"`, `6`, `10000.5` or `null` and yields a string.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_accepts_numeric_id_and_stipend() {
        let json = r#"{
            "id": 7,
            "title": "Data Intern",
            "sector": "Technology",
            "skills_required": ["Python", "SQL"],
            "education_level": "Post Graduate",
            "experience_level": "Intermediate",
            "stipend": 15000,
            "duration": "3 months"
        }"#;
        let posting: InternshipPosting = serde_json::from_str(json).unwrap();
        assert_eq!(posting.id, "7");
        assert_eq!(posting.stipend, "15000");
        assert_eq!(posting.duration, "3 months");
        assert_eq!(posting.education_level, EducationLevel::PostGraduate);
        assert_eq!(posting.experience_level, ExperienceLevel::Intermediate);
        assert!(!posting.remote_work);
        assert!(posting.location.is_empty());
    }

    #[test]
    fn test_sector_keywords_default_to_empty() {
        let sector: SectorDefinition = serde_json::from_str(r#"{"id": "Culture"}"#).unwrap();
        assert_eq!(sector.id, "Culture");
        assert!(sector.keywords.is_empty());
    }
}
