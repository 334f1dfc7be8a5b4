//! Skill recognition: finds catalog skills and well-known technology terms in
//! free text.
//!
//! Three passes, unioned:
//! 1. catalog pass: every canonical skill, emitted in its catalog spelling,
//! 2. pattern pass: a fixed category → term table, emitted proper-cased,
//! 3. regex pass: fixed language/tool patterns run on the raw text.
//!
//! Terms also match a small fixed set of abbreviations (`js`, `ml`, `reactjs`, …).
//! Results collapse case-insensitively (first pass wins) and are sorted.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::normalize::{normalize, NormalizedText};

static SKILL_PATTERNS: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "python", "java", "javascript", "c++", "c#", "php", "ruby", "go", "rust", "swift",
            "kotlin",
        ],
    ),
    (
        "web_development",
        &[
            "html", "css", "react", "angular", "vue", "node.js", "django", "flask", "express",
        ],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite"],
    ),
    (
        "cloud",
        &[
            "aws",
            "azure",
            "gcp",
            "google cloud",
            "amazon web services",
            "microsoft azure",
        ],
    ),
    (
        "tools",
        &["git", "docker", "kubernetes", "jenkins", "ci/cd", "linux", "windows"],
    ),
    (
        "data_science",
        &[
            "machine learning",
            "data analysis",
            "pandas",
            "numpy",
            "tensorflow",
            "pytorch",
            "scikit-learn",
        ],
    ),
    (
        "design",
        &[
            "photoshop",
            "illustrator",
            "figma",
            "sketch",
            "ui/ux",
            "user interface",
            "user experience",
        ],
    ),
    (
        "marketing",
        &[
            "digital marketing",
            "seo",
            "sem",
            "social media",
            "content marketing",
            "email marketing",
        ],
    ),
    (
        "management",
        &[
            "project management",
            "agile",
            "scrum",
            "leadership",
            "team management",
        ],
    ),
    (
        "communication",
        &[
            "english",
            "communication",
            "presentation",
            "writing",
            "public speaking",
        ],
    ),
];

/// Normalized fragment → extra spellings that also count as a match.
/// The first fragment contained in a term decides its variations.
static VARIATIONS: &[(&str, &[&str])] = &[
    ("javascript", &["js", "ecmascript"]),
    ("python", &["py"]),
    ("machine learning", &["ml", "machinelearning"]),
    ("data science", &["datascience"]),
    ("user interface", &["ui", "userinterface"]),
    ("user experience", &["ux", "userexperience"]),
    ("react", &["reactjs"]),
    ("node js", &["nodejs"]),
    ("vue", &["vuejs"]),
    ("angular", &["angularjs"]),
];

static TECH_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(python|java|javascript|typescript|php|ruby|go|rust|swift|kotlin|scala|r)\b",
        r"(?i)\b(html|css|sass|scss|less)\b",
        r"(?i)\b(react|angular|vue|ember|backbone)\b",
        r"(?i)\b(node\.?js|express|django|flask|spring|laravel|rails)\b",
        r"(?i)\b(git|github|gitlab|docker|kubernetes|jenkins|aws|azure|gcp)\b",
        r"(?i)\b(mysql|postgresql|mongodb|redis|elasticsearch)\b",
        r"(?i)\b(linux|ubuntu|centos|windows|macos)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("static skill pattern compiles"))
    .collect()
});

/// Terms displayed upper-case instead of proper-cased.
const UPPERCASE_TERMS: &[&str] = &["AWS", "GCP"];

/// A term prepared for matching: its normalized form plus abbreviations.
struct Term {
    display: String,
    normalized: String,
    literal: Option<String>,
    variations: &'static [&'static str],
}

impl Term {
    fn new(raw: &str, display: String) -> Self {
        let normalized = normalize(raw);
        let literal = raw
            .contains(['+', '#'])
            .then(|| raw.trim().to_lowercase());
        Term {
            display,
            variations: variations_for(&normalized),
            normalized,
            literal,
        }
    }

    /// `C++`, `C#` and `C` all normalize to `c`; symbolic terms stay apart.
    fn dedup_key(&self) -> &str {
        self.literal.as_deref().unwrap_or(&self.normalized)
    }

    fn matches(&self, text: &NormalizedText) -> bool {
        if let Some(literal) = &self.literal {
            return text.contains_literal(literal);
        }
        text.contains_phrase(&self.normalized)
            || self.variations.iter().any(|v| text.contains_phrase(v))
    }
}

fn variations_for(normalized: &str) -> &'static [&'static str] {
    VARIATIONS
        .iter()
        .find(|(fragment, _)| normalized.contains(fragment))
        .map(|(_, v)| *v)
        .unwrap_or(&[])
}

/// Recognizes skills in free text. Built once from the canonical skill list;
/// immutable and shareable across threads afterwards.
pub struct SkillRecognizer {
    catalog_terms: Vec<Term>,
    pattern_terms: Vec<Term>,
}

impl SkillRecognizer {
    pub fn new(catalog_skills: &[String]) -> Self {
        let mut seen = HashSet::new();
        let catalog_terms = catalog_skills
            .iter()
            .map(|s| Term::new(s, s.trim().to_string()))
            .filter(|t| !t.normalized.is_empty())
            .filter(|t| seen.insert(t.dedup_key().to_string()))
            .collect();

        let pattern_terms = SKILL_PATTERNS
            .iter()
            .flat_map(|(_, terms)| terms.iter())
            .map(|t| Term::new(t, display_case(t)))
            .collect();

        SkillRecognizer {
            catalog_terms,
            pattern_terms,
        }
    }

    /// Skills found in `text`, de-duplicated ignoring case and sorted.
    pub fn recognize(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }
        let normalized = NormalizedText::new(text);
        let mut found = FoundSkills::default();

        for term in self.catalog_terms.iter().chain(&self.pattern_terms) {
            if term.matches(&normalized) {
                found.insert(&term.display);
            }
        }

        for pattern in TECH_PATTERNS.iter() {
            for capture in pattern.captures_iter(text) {
                found.insert(&display_case(&capture[1]));
            }
        }

        found.into_sorted()
    }
}

#[derive(Default)]
struct FoundSkills {
    by_key: HashMap<String, String>,
}

impl FoundSkills {
    fn insert(&mut self, skill: &str) {
        self.by_key
            .entry(skill.to_lowercase())
            .or_insert_with(|| skill.to_string());
    }

    fn into_sorted(self) -> Vec<String> {
        let mut skills: Vec<String> = self.by_key.into_values().collect();
        skills.sort();
        skills
    }
}

fn display_case(term: &str) -> String {
    let upper = term.to_uppercase();
    if UPPERCASE_TERMS.contains(&upper.as_str()) {
        upper
    } else {
        proper_case(term)
    }
}

/// `"machine learning"` → `"Machine Learning"`; `"node.js"` → `"Node.js"`.
fn proper_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recognizer(catalog: &[&str]) -> SkillRecognizer {
        let skills: Vec<String> = catalog.iter().map(|s| s.to_string()).collect();
        SkillRecognizer::new(&skills)
    }

    #[test]
    fn test_python_and_reactjs() {
        let skills = recognizer(&[]).recognize("I use Python and ReactJS");
        assert!(skills.contains(&"Python".to_string()), "{skills:?}");
        assert!(skills.iter().any(|s| s.starts_with("React")), "{skills:?}");
    }

    #[test]
    fn test_recognize_is_idempotent() {
        let r = recognizer(&["Data Analysis", "Excel"]);
        let text = "Data analysis in Excel and SQL; built ML pipelines with Docker on AWS.";
        assert_eq!(r.recognize(text), r.recognize(text));
    }

    #[test]
    fn test_catalog_spelling_wins_over_proper_case() {
        let skills = recognizer(&["JavaScript", "UI/UX"]).recognize("javascript and ui/ux design");
        assert!(skills.contains(&"JavaScript".to_string()));
        assert!(skills.contains(&"UI/UX".to_string()));
        assert!(!skills.contains(&"Javascript".to_string()));
        assert!(!skills.contains(&"Ui/ux".to_string()));
    }

    #[test]
    fn test_abbreviations_expand() {
        let skills = recognizer(&["Machine Learning"]).recognize("Hands-on ML projects, JS tooling");
        assert!(skills.contains(&"Machine Learning".to_string()), "{skills:?}");
        assert!(skills.contains(&"Javascript".to_string()), "{skills:?}");
    }

    #[test]
    fn test_word_boundaries_prevent_partial_hits() {
        let skills = recognizer(&["Excel"]).recognize("Excellent teamwork");
        assert!(!skills.contains(&"Excel".to_string()), "{skills:?}");
    }

    #[test]
    fn test_symbolic_terms_match_literally() {
        let skills = recognizer(&["C++"]).recognize("Proficient in C++ and C#.");
        assert!(skills.contains(&"C++".to_string()), "{skills:?}");
        assert!(skills.contains(&"C#".to_string()), "{skills:?}");
    }

    #[test]
    fn test_symbolic_catalog_entries_are_kept_apart() {
        let r = recognizer(&["C", "C++", "C#", "c++"]);
        assert_eq!(r.catalog_terms.len(), 3);
        let skills = r.recognize("Languages: C, C++ and C#");
        for skill in ["C", "C++", "C#"] {
            assert!(skills.contains(&skill.to_string()), "{skill}: {skills:?}");
        }
    }

    #[test]
    fn test_cloud_acronyms_stay_upper_case() {
        let skills = recognizer(&[]).recognize("Deployed on aws and gcp");
        assert!(skills.contains(&"AWS".to_string()), "{skills:?}");
        assert!(skills.contains(&"GCP".to_string()), "{skills:?}");
    }

    #[test]
    fn test_output_is_sorted_without_case_duplicates() {
        let skills = recognizer(&["Python"]).recognize("python PYTHON Python django Django");
        assert_eq!(skills, vec!["Django", "Python"]);
    }

    #[test]
    fn test_empty_text_has_no_skills() {
        assert!(recognizer(&["Python"]).recognize("   ").is_empty());
    }

    #[test]
    fn test_proper_case() {
        assert_eq!(proper_case("machine learning"), "Machine Learning");
        assert_eq!(proper_case("node.js"), "Node.js");
        assert_eq!(proper_case("GITHUB"), "Github");
    }
}
