//! Match scoring: a pluggable scorer that measures a candidate
//! profile against one internship posting.
//!
//! Default: `WeightedMatchScorer` (six weighted factors with partial credit).
//! `AppState` holds an `Arc<dyn MatchScorer>`, so a different similarity
//! backend can be swapped in at startup without touching the ranker.

use std::collections::HashSet;

use crate::catalog::models::{InternshipPosting, SectorDefinition};
use crate::matching::goals::{goal_keywords, text_mentions_goal};
use crate::models::candidate::{comparison_key, CandidateProfile, EducationLevel, ExperienceLevel};

// ────────────────────────────────────────────────────────────────────────────
// Weights and partial-credit constants
// ────────────────────────────────────────────────────────────────────────────

pub const EDUCATION_WEIGHT: f64 = 0.30;
pub const SKILLS_WEIGHT: f64 = 0.25;
pub const SECTOR_WEIGHT: f64 = 0.20;
pub const LOCATION_WEIGHT: f64 = 0.15;
pub const GOAL_WEIGHT: f64 = 0.15;
pub const EXPERIENCE_WEIGHT: f64 = 0.10;

const OVERQUALIFIED_EDUCATION_CREDIT: f64 = 0.8;
const SECTOR_KEYWORD_CREDIT: f64 = 0.5;
const SAME_REGION_CREDIT: f64 = 0.6;
const REMOTE_CREDIT: f64 = 0.8;
const GOAL_CREDIT: f64 = 0.3;
const STRETCH_EXPERIENCE_CREDIT: f64 = 0.8;

/// Regions recognized for the same-region location credit.
pub const REGIONS: &[&str] = &[
    "maharashtra",
    "karnataka",
    "tamil nadu",
    "delhi",
    "rajasthan",
    "telangana",
    "punjab",
    "west bengal",
    "haryana",
    "goa",
];

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap scoring backends without
/// touching the ranker, handlers, or callers.
///
/// Implementations must be pure: `score` returns a value in `[0, 1]` and
/// depends only on its arguments and immutable state.
pub trait MatchScorer: Send + Sync {
    fn score(&self, candidate: &CandidateProfile, internship: &InternshipPosting) -> f64;

    /// Backend label, for logs.
    fn name(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// WeightedMatchScorer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Factor {
    Education,
    Skills,
    Sector,
    Location,
    CareerGoal,
    Experience,
}

/// Credit earned for one factor. Only applicable factors are recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorScore {
    pub factor: Factor,
    pub weight: f64,
    /// Partial credit in `[0, 1]`.
    pub credit: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorScore>,
}

impl ScoreBreakdown {
    fn add(&mut self, factor: Factor, weight: f64, credit: f64) {
        self.factors.push(FactorScore {
            factor,
            weight,
            credit,
        });
    }

    pub fn earned(&self) -> f64 {
        self.factors.iter().map(|f| f.weight * f.credit).sum()
    }

    pub fn possible(&self) -> f64 {
        self.factors.iter().map(|f| f.weight).sum()
    }

    /// `earned / possible`, or 0 when nothing was applicable.
    pub fn normalized(&self) -> f64 {
        let possible = self.possible();
        if possible > 0.0 {
            self.earned() / possible
        } else {
            0.0
        }
    }

    pub fn credit(&self, factor: Factor) -> Option<f64> {
        self.factors
            .iter()
            .find(|f| f.factor == factor)
            .map(|f| f.credit)
    }
}

/// Six-factor weighted scorer.
///
/// Factors and weights: education 0.30, skills 0.25, sector 0.20,
/// location 0.15, career goal 0.15, experience 0.10.
///
/// Location only counts toward the maximum when both location strings are
/// present; the career goal only when the candidate states a recognized goal.
/// A candidate without a goal is therefore normalized over the remaining
/// factors alone.
pub struct WeightedMatchScorer {
    sectors: Vec<SectorDefinition>,
}

impl WeightedMatchScorer {
    pub fn new(sectors: Vec<SectorDefinition>) -> Self {
        Self { sectors }
    }

    pub fn breakdown(
        &self,
        candidate: &CandidateProfile,
        internship: &InternshipPosting,
    ) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        breakdown.add(
            Factor::Education,
            EDUCATION_WEIGHT,
            education_credit(candidate.education_level.as_ref(), &internship.education_level),
        );

        let overlap = SkillOverlap::between(candidate, internship);
        breakdown.add(Factor::Skills, SKILLS_WEIGHT, overlap.ratio());

        breakdown.add(
            Factor::Sector,
            SECTOR_WEIGHT,
            self.sector_credit(&candidate.sector_interests, &internship.sector),
        );

        if let Some(credit) = location_credit(candidate, internship) {
            breakdown.add(Factor::Location, LOCATION_WEIGHT, credit);
        }

        if let Some(credit) = goal_credit(candidate, internship) {
            breakdown.add(Factor::CareerGoal, GOAL_WEIGHT, credit);
        }

        breakdown.add(
            Factor::Experience,
            EXPERIENCE_WEIGHT,
            experience_credit(&candidate.experience_level, &internship.experience_level),
        );

        breakdown
    }

    fn sector_credit(&self, interests: &[String], sector: &str) -> f64 {
        if interest_matches_sector(interests, sector) {
            return 1.0;
        }
        // Only the first registered definition for the sector is consulted.
        let Some(definition) = self
            .sectors
            .iter()
            .find(|s| s.id.eq_ignore_ascii_case(sector.trim()))
        else {
            return 0.0;
        };
        let interests_lower: Vec<String> = interests.iter().map(|i| i.to_lowercase()).collect();
        let keyword_hit = definition
            .keywords
            .iter()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .any(|k| interests_lower.iter().any(|i| i.contains(&k)));
        if keyword_hit {
            SECTOR_KEYWORD_CREDIT
        } else {
            0.0
        }
    }
}

impl MatchScorer for WeightedMatchScorer {
    fn score(&self, candidate: &CandidateProfile, internship: &InternshipPosting) -> f64 {
        self.breakdown(candidate, internship)
            .normalized()
            .clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "weighted"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Factor rules (shared with match explanations)
// ────────────────────────────────────────────────────────────────────────────

pub fn education_credit(candidate: Option<&EducationLevel>, required: &EducationLevel) -> f64 {
    match candidate {
        Some(level) if level == required => 1.0,
        Some(EducationLevel::PostGraduate) if *required == EducationLevel::Graduate => {
            OVERQUALIFIED_EDUCATION_CREDIT
        }
        _ => 0.0,
    }
}

pub fn experience_credit(candidate: &ExperienceLevel, required: &ExperienceLevel) -> f64 {
    if candidate == required {
        1.0
    } else if *candidate == ExperienceLevel::Intermediate && *required == ExperienceLevel::Beginner
    {
        STRETCH_EXPERIENCE_CREDIT
    } else {
        0.0
    }
}

/// True when an interest and the sector contain one another, ignoring case.
pub fn interest_matches_sector(interests: &[String], sector: &str) -> bool {
    let sector = sector.trim().to_lowercase();
    if sector.is_empty() {
        return false;
    }
    interests
        .iter()
        .map(|i| i.trim().to_lowercase())
        .filter(|i| !i.is_empty())
        .any(|i| sector.contains(&i) || i.contains(&sector))
}

/// True when both locations are present and one contains the other, ignoring case.
pub fn locations_overlap(preferred: &str, location: &str) -> bool {
    let preferred = preferred.trim().to_lowercase();
    let location = location.trim().to_lowercase();
    !preferred.is_empty()
        && !location.is_empty()
        && (location.contains(&preferred) || preferred.contains(&location))
}

pub fn mentions_region(location_lower: &str) -> bool {
    REGIONS.iter().any(|r| location_lower.contains(r))
}

pub fn remote_match(candidate: &CandidateProfile, internship: &InternshipPosting) -> bool {
    candidate.remote_work_preference && internship.remote_work
}

/// `None` when either location is blank: the factor is then not applicable.
fn location_credit(candidate: &CandidateProfile, internship: &InternshipPosting) -> Option<f64> {
    let preferred = candidate.location_preference.trim().to_lowercase();
    let location = internship.location.trim().to_lowercase();
    if preferred.is_empty() || location.is_empty() {
        return None;
    }

    let credit = if locations_overlap(&preferred, &location) {
        1.0
    } else if mentions_region(&preferred) && mentions_region(&location) {
        SAME_REGION_CREDIT
    } else if remote_match(candidate, internship) {
        REMOTE_CREDIT
    } else {
        0.0
    };
    Some(credit)
}

/// `None` when the candidate has no recognized goal: the factor is then not applicable.
fn goal_credit(candidate: &CandidateProfile, internship: &InternshipPosting) -> Option<f64> {
    let keywords = goal_keywords(candidate.goal()?)?;
    if text_mentions_goal(keywords, &posting_text(internship)) {
        Some(GOAL_CREDIT)
    } else {
        Some(0.0)
    }
}

/// Lower-cased title and description, the text career goals are checked against.
pub fn posting_text(internship: &InternshipPosting) -> String {
    format!("{} {}", internship.title, internship.description).to_lowercase()
}

/// Required skills of a posting that the candidate already has.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillOverlap {
    /// Matched skills in the posting's spelling and order.
    pub matched: Vec<String>,
    /// Number of distinct required skills.
    pub required: usize,
}

impl SkillOverlap {
    pub fn between(candidate: &CandidateProfile, internship: &InternshipPosting) -> Self {
        let have = candidate.skill_keys();
        let mut seen = HashSet::new();
        let mut matched = Vec::new();
        for skill in &internship.skills_required {
            let key = comparison_key(skill);
            if key.is_empty() || !seen.insert(key.clone()) {
                continue;
            }
            if have.contains(&key) {
                matched.push(skill.trim().to_string());
            }
        }
        SkillOverlap {
            matched,
            required: seen.len(),
        }
    }

    /// Fraction of required skills covered; 0 when nothing is required.
    pub fn ratio(&self) -> f64 {
        if self.required == 0 {
            0.0
        } else {
            self.matched.len() as f64 / self.required as f64
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
