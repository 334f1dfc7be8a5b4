use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Academic level of a candidate or the minimum a posting asks for.
///
/// Serialized as its display string. Strings outside the known set are kept
/// verbatim in `Other` so catalog data round-trips unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EducationLevel {
    #[default]
    Graduate,
    PostGraduate,
    PhD,
    Other(String),
}

impl EducationLevel {
    pub fn as_str(&self) -> &str {
        match self {
            EducationLevel::Graduate => "Graduate",
            EducationLevel::PostGraduate => "Post Graduate",
            EducationLevel::PhD => "PhD",
            EducationLevel::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for EducationLevel {
    fn from(value: String) -> Self {
        match value.trim() {
            "Graduate" => EducationLevel::Graduate,
            "Post Graduate" => EducationLevel::PostGraduate,
            "PhD" => EducationLevel::PhD,
            _ => EducationLevel::Other(value),
        }
    }
}

impl From<&str> for EducationLevel {
    fn from(value: &str) -> Self {
        EducationLevel::from(value.to_string())
    }
}

impl From<EducationLevel> for String {
    fn from(value: EducationLevel) -> Self {
        match value {
            EducationLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority of a candidate or the level a posting targets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Other(String),
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
            ExperienceLevel::Other(s) => s.as_str(),
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(value: String) -> Self {
        match value.trim() {
            "Beginner" => ExperienceLevel::Beginner,
            "Intermediate" => ExperienceLevel::Intermediate,
            "Advanced" => ExperienceLevel::Advanced,
            _ => ExperienceLevel::Other(value),
        }
    }
}

impl From<&str> for ExperienceLevel {
    fn from(value: &str) -> Self {
        ExperienceLevel::from(value.to_string())
    }
}

impl From<ExperienceLevel> for String {
    fn from(value: ExperienceLevel) -> Self {
        match value {
            ExperienceLevel::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured description of the job-seeker, the input to scoring.
///
/// `skills` and `sector_interests` keep the caller's spelling; comparisons
/// happen on a trimmed, lower-cased key. Call [`CandidateProfile::dedup`] after
/// building one from request input so neither list holds duplicates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub education_level: Option<EducationLevel>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sector_interests: Vec<String>,
    #[serde(default)]
    pub location_preference: String,
    #[serde(default)]
    pub remote_work_preference: bool,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_goal: Option<String>,
}

impl CandidateProfile {
    /// Drops blank entries and entries whose comparison key was already seen,
    /// keeping the first spelling.
    pub fn dedup(&mut self) {
        dedup_by_key(&mut self.skills);
        dedup_by_key(&mut self.sector_interests);
    }

    /// Comparison keys for the candidate's skills.
    pub fn skill_keys(&self) -> HashSet<String> {
        self.skills.iter().map(|s| comparison_key(s)).collect()
    }

    /// The stated career goal, if it is non-blank.
    pub fn goal(&self) -> Option<&str> {
        self.career_goal
            .as_deref()
            .map(str::trim)
            .filter(|g| !g.is_empty())
    }
}

/// Key used to compare skills and interests across differently cased input.
pub fn comparison_key(value: &str) -> String {
    value.trim().to_lowercase()
}

fn dedup_by_key(values: &mut Vec<String>) {
    let mut seen = HashSet::new();
    values.retain(|v| {
        let key = comparison_key(v);
        !key.is_empty() && seen.insert(key)
    });
}
