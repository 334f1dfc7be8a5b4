//! Résumé field extraction: contact details, education and experience
//! sections, and the two inferred levels.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::candidate::{EducationLevel, ExperienceLevel};
use crate::models::resume::ExtractedResumeData;
use crate::resume::skills::SkillRecognizer;

const MAX_SECTION_LINES: usize = 3;
const SECTION_SEPARATOR: &str = " | ";
const NAME_SCAN_LINES: usize = 5;
pub const DEFAULT_NAME: &str = "Candidate";

// ────────────────────────────────────────────────────────────────────────────
// Sections
// ────────────────────────────────────────────────────────────────────────────

/// Keywords that open a section and the keywords of other sections that close it.
struct SectionRule {
    start: &'static [&'static str],
    stop: &'static [&'static str],
}

const EDUCATION_SECTION: SectionRule = SectionRule {
    start: &[
        "education",
        "academic",
        "qualification",
        "degree",
        "university",
        "college",
    ],
    stop: &["experience", "work", "skills", "projects"],
};

const EXPERIENCE_SECTION: SectionRule = SectionRule {
    start: &["experience", "work", "employment", "career", "professional"],
    stop: &["education", "skills", "projects", "certification"],
};

static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:bachelor|b\.(?:s|e|a|sc|tech|com)\b|b(?:sc|tech|com|ca)\b)",
        r"(?i)\b(?:master|m\.(?:s|a|sc|tech|com)\b|m(?:sc|tech|com|ba)\b)",
        r"(?i)\b(?:ph\.?\s?d|doctorate|doctoral)\b",
        r"(?i)\b(?:diploma|certificate|certification)\b",
        r"(?i)\b(?:high school|secondary|intermediate)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static degree pattern compiles"))
    .collect()
});

/// Collects the lines after the first header line until a line belonging to
/// another section shows up.
fn scan_section(text: &str, rule: &SectionRule) -> Vec<String> {
    let mut collected = Vec::new();
    let mut inside = false;

    for line in text.lines() {
        let trimmed = line.trim();
        let lower = trimmed.to_lowercase();

        if !inside {
            inside = rule.start.iter().any(|k| lower.contains(k));
            continue;
        }
        if rule.stop.iter().any(|k| lower.contains(k)) {
            break;
        }
        if !trimmed.is_empty() {
            collected.push(trimmed.to_string());
        }
    }
    collected
}

fn join_top(lines: Vec<String>) -> String {
    lines
        .into_iter()
        .take(MAX_SECTION_LINES)
        .collect::<Vec<_>>()
        .join(SECTION_SEPARATOR)
}

/// Up to three education lines. Without an education header, any line that
/// names a degree is used instead.
pub fn extract_education(text: &str) -> String {
    let mut lines = scan_section(text, &EDUCATION_SECTION);
    if lines.is_empty() {
        lines = text
            .lines()
            .map(str::trim)
            .filter(|line| DEGREE_PATTERNS.iter().any(|p| p.is_match(line)))
            .map(str::to_string)
            .collect();
    }
    join_top(lines)
}

pub fn extract_experience(text: &str) -> String {
    join_top(scan_section(text, &EXPERIENCE_SECTION))
}

// ────────────────────────────────────────────────────────────────────────────
// Contact details
// ────────────────────────────────────────────────────────────────────────────

static NAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s.]+$").expect("static name pattern compiles"));

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("static email pattern compiles")
});

/// Tried in order; the first pattern with any match wins.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b\d{10}\b",
        r"\+91[\s-]?\d{10}\b",
        r"\b\d{3}[\s-]?\d{3}[\s-]?\d{4}\b",
        r"\(\d{3}\)[\s-]?\d{3}[\s-]?\d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static phone pattern compiles"))
    .collect()
});

const NOT_A_NAME: &[&str] = &["resume", "cv", "curriculum", "vitae"];

pub fn extract_name(text: &str) -> String {
    text.lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| {
            let lower = line.to_lowercase();
            (3..50).contains(&line.len())
                && NAME_SHAPE.is_match(line)
                && !NOT_A_NAME.iter().any(|w| lower.contains(w))
        })
        .unwrap_or(DEFAULT_NAME)
        .to_string()
}

pub fn extract_email(text: &str) -> String {
    EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

pub fn extract_phone(text: &str) -> String {
    PHONE_PATTERNS
        .iter()
        .find_map(|p| p.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

// ────────────────────────────────────────────────────────────────────────────
// Levels
// ────────────────────────────────────────────────────────────────────────────

const BEGINNER_PHRASES: &[&str] = &["fresher", "entry level", "recent graduate", "new graduate"];

static YEARS_OF_EXPERIENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\+?\s*(?:years?|yrs?)\s*(?:of\s*)?experience")
        .expect("static years pattern compiles")
});

static SENIOR_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:senior|lead|manager|director|head)\b")
        .expect("static seniority pattern compiles")
});

static PHD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:ph\.?\s?d|doctorate|doctoral)\b").expect("static phd pattern compiles")
});

static POST_GRADUATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"\b(?:master(?:'?s)?\b|m\.(?:s|a|sc|tech|com)\b|m(?:sc|tech|com|ba)\b|post[\s-]?graduate)",
    )
    .expect("static post-graduate pattern compiles")
});

/// First matching rule wins: beginner phrases, then stated years of
/// experience, then senior titles. Intern/trainee wording and everything
/// else is a beginner.
pub fn determine_experience_level(text: &str) -> ExperienceLevel {
    let lower = text.to_lowercase();

    if BEGINNER_PHRASES.iter().any(|p| lower.contains(p)) {
        return ExperienceLevel::Beginner;
    }

    if let Some(years) = YEARS_OF_EXPERIENCE
        .captures(&lower)
        // Digits only, so a failed parse is an overflow: plenty of years.
        .map(|c| c[1].parse::<u32>().unwrap_or(u32::MAX))
    {
        if years >= 3 {
            return ExperienceLevel::Advanced;
        }
        if years >= 1 {
            return ExperienceLevel::Intermediate;
        }
    }

    if SENIOR_TITLE.is_match(&lower) {
        return ExperienceLevel::Advanced;
    }

    ExperienceLevel::Beginner
}

pub fn determine_education_level(text: &str) -> EducationLevel {
    let lower = text.to_lowercase();
    if PHD.is_match(&lower) {
        EducationLevel::PhD
    } else if POST_GRADUATE.is_match(&lower) {
        EducationLevel::PostGraduate
    } else {
        EducationLevel::Graduate
    }
}

/// Every field of [`ExtractedResumeData`] from plain résumé text. Blank text
/// gives [`ExtractedResumeData::empty`].
pub fn extract_fields(text: &str, recognizer: &SkillRecognizer) -> ExtractedResumeData {
    if text.trim().is_empty() {
        return ExtractedResumeData::empty();
    }

    ExtractedResumeData {
        skills: recognizer.recognize(text),
        education: extract_education(text),
        experience: extract_experience(text),
        name: extract_name(text),
        email: extract_email(text),
        phone: extract_phone(text),
        experience_level: determine_experience_level(text),
        education_level: determine_education_level(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        contact: jane.doe@example.com | 9876543210\n\
        \n\
        Education\n\
        B.Tech in Computer Science, ABC University\n\
        Class XII, City School\n\
        \n\
        Experience\n\
        Software intern at Acme, built dashboards in Python\n\
        Teaching assistant for data structures\n\
        Skills\n\
        Python, SQL, Git\n";

    #[test]
    fn test_empty_text_gives_defaults() {
        let data = extract_fields("", &SkillRecognizer::new(&[]));
        assert_eq!(data, ExtractedResumeData::empty());
        assert!(data.skills.is_empty());
        assert_eq!(data.experience_level, ExperienceLevel::Beginner);
        assert_eq!(data.education_level, EducationLevel::Graduate);
    }

    #[test]
    fn test_email_extraction() {
        assert_eq!(
            extract_email("contact: jane.doe@example.com"),
            "jane.doe@example.com"
        );
        assert_eq!(extract_email("no address here, only text"), "");
    }

    #[test]
    fn test_phone_patterns_in_priority_order() {
        assert_eq!(extract_phone("call 9876543210 now"), "9876543210");
        assert_eq!(extract_phone("tel 555-123-4567"), "555-123-4567");
        assert_eq!(extract_phone("tel (555) 123-4567"), "(555) 123-4567");
        assert_eq!(extract_phone("no digits"), "");
    }

    #[test]
    fn test_name_from_first_lines() {
        assert_eq!(extract_name(SAMPLE), "Jane Doe");
        assert_eq!(extract_name("RESUME\nJ. R. Smith\n"), "J. R. Smith");
        assert_eq!(extract_name("curriculum vitae\n12345\n"), DEFAULT_NAME);
    }

    #[test]
    fn test_education_section_keeps_degree_lines() {
        assert_eq!(
            extract_education(SAMPLE),
            "B.Tech in Computer Science, ABC University | Class XII, City School"
        );
    }

    #[test]
    fn test_education_falls_back_to_degree_patterns() {
        let text = "John Roe\nM.Sc Physics 2021\nLikes hiking\nBachelor of Arts 2019";
        assert_eq!(extract_education(text), "M.Sc Physics 2021 | Bachelor of Arts 2019");
    }

    #[test]
    fn test_experience_section_stops_at_next_section() {
        assert_eq!(
            extract_experience(SAMPLE),
            "Software intern at Acme, built dashboards in Python | Teaching assistant for data structures"
        );
        assert_eq!(extract_experience("Nothing relevant"), "");
    }

    #[test]
    fn test_experience_level_rules() {
        assert_eq!(
            determine_experience_level("Fresher with 5 years experience in hobbies"),
            ExperienceLevel::Beginner
        );
        assert_eq!(
            determine_experience_level("4+ years of experience in Java"),
            ExperienceLevel::Advanced
        );
        assert_eq!(
            determine_experience_level("2 yrs experience"),
            ExperienceLevel::Intermediate
        );
        assert_eq!(
            determine_experience_level("99999999999 years of experience"),
            ExperienceLevel::Advanced
        );
        assert_eq!(
            determine_experience_level("Team Lead at Acme"),
            ExperienceLevel::Advanced
        );
        assert_eq!(
            determine_experience_level("Summer intern"),
            ExperienceLevel::Beginner
        );
        assert_eq!(
            determine_experience_level("Misleading headline"),
            ExperienceLevel::Beginner
        );
    }

    #[test]
    fn test_education_level_priority() {
        assert_eq!(
            determine_education_level("Ph.D. in Chemistry, M.Sc before that"),
            EducationLevel::PhD
        );
        assert_eq!(
            determine_education_level("MBA, Finance"),
            EducationLevel::PostGraduate
        );
        assert_eq!(
            determine_education_level("Master's in Design"),
            EducationLevel::PostGraduate
        );
        assert_eq!(
            determine_education_level("Mastered Excel during B.Com"),
            EducationLevel::Graduate
        );
    }

    #[test]
    fn test_extract_fields_full_sample() {
        let recognizer = SkillRecognizer::new(&["Python".to_string(), "SQL".to_string()]);
        let data = extract_fields(SAMPLE, &recognizer);
        assert_eq!(data.name, "Jane Doe");
        assert_eq!(data.email, "jane.doe@example.com");
        assert_eq!(data.phone, "9876543210");
        assert!(data.skills.contains(&"Python".to_string()));
        assert!(data.skills.contains(&"SQL".to_string()));
        assert_eq!(data.education_level, EducationLevel::Graduate);
    }
}
