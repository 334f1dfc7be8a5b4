//! Recommendation ranking: scores a whole catalog against one candidate and
//! explains each retained match.

use serde::{Deserialize, Serialize};

use crate::catalog::models::InternshipPosting;
use crate::matching::goals::{goal_keywords, text_mentions_goal};
use crate::matching::scorer::{
    interest_matches_sector, locations_overlap, posting_text, remote_match, MatchScorer,
    SkillOverlap,
};
use crate::models::candidate::CandidateProfile;

/// Raw scores at or below this floor are never returned.
pub const MATCH_FLOOR: f64 = 0.1;

pub const MAX_REASONS: usize = 3;
const MAX_NAMED_SKILLS: usize = 3;

/// One ranked posting. Serializes flat: posting fields plus the score fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub internship: InternshipPosting,
    /// 0–100, one decimal.
    pub match_score: f64,
    /// 0–100, one decimal.
    pub skills_match_percentage: f64,
    pub match_reasons: Vec<String>,
}

/// Scores every posting, keeps the best `limit`, then drops anything at or
/// below [`MATCH_FLOOR`].
///
/// Truncation happens before the floor filter, so fewer than `limit` entries
/// may come back even when the catalog holds more postings. Equal scores keep
/// catalog order.
pub fn rank(
    scorer: &dyn MatchScorer,
    candidate: &CandidateProfile,
    catalog: &[InternshipPosting],
    limit: usize,
) -> Vec<ScoredMatch> {
    let mut scored: Vec<(&InternshipPosting, f64)> = catalog
        .iter()
        .map(|internship| (internship, scorer.score(candidate, internship)))
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(limit)
        .filter(|(_, score)| *score > MATCH_FLOOR)
        .map(|(internship, score)| {
            let overlap = SkillOverlap::between(candidate, internship);
            ScoredMatch {
                internship: internship.clone(),
                match_score: round_one_decimal(score * 100.0),
                skills_match_percentage: round_one_decimal(overlap.ratio() * 100.0),
                match_reasons: explain(candidate, internship),
            }
        })
        .collect()
}

/// Up to three human-readable reasons, in fixed priority order:
/// education, named skills, sector, location/remote, career goal, experience.
pub fn explain(candidate: &CandidateProfile, internship: &InternshipPosting) -> Vec<String> {
    let mut reasons = Vec::new();

    if candidate.education_level.as_ref() == Some(&internship.education_level) {
        reasons.push("Your education level matches the requirement".to_string());
    }

    let overlap = SkillOverlap::between(candidate, internship);
    if !overlap.matched.is_empty() {
        let named: Vec<&str> = overlap
            .matched
            .iter()
            .take(MAX_NAMED_SKILLS)
            .map(String::as_str)
            .collect();
        reasons.push(format!("You have relevant skills: {}", named.join(", ")));
    }

    if interest_matches_sector(&candidate.sector_interests, &internship.sector) {
        reasons.push(format!("Matches your interest in {}", internship.sector));
    }

    if !candidate.location_preference.trim().is_empty() && !internship.location.trim().is_empty()
    {
        if locations_overlap(&candidate.location_preference, &internship.location) {
            reasons.push(format!(
                "Located in your preferred area: {}",
                internship.location
            ));
        } else if remote_match(candidate, internship) {
            reasons.push("Offers remote work as per your preference".to_string());
        }
    }

    if let Some(goal) = candidate.goal() {
        if let Some(keywords) = goal_keywords(goal) {
            if text_mentions_goal(keywords, &posting_text(internship)) {
                reasons.push(format!("Aligns with your career goal: {goal}"));
            }
        }
    }

    if candidate.experience_level == internship.experience_level {
        reasons.push("Suitable for your experience level".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::SectorDefinition;
    use crate::matching::scorer::WeightedMatchScorer;
    use crate::models::candidate::{EducationLevel, ExperienceLevel};

    fn posting(title: &str, education: EducationLevel, skills: &[&str]) -> InternshipPosting {
        InternshipPosting {
            title: title.to_string(),
            sector: "Technology".to_string(),
            skills_required: skills.iter().map(|s| s.to_string()).collect(),
            location: "Bangalore".to_string(),
            remote_work: true,
            education_level: education,
            experience_level: ExperienceLevel::Beginner,
            ..Default::default()
        }
    }

    fn candidate() -> CandidateProfile {
        CandidateProfile {
            education_level: Some(EducationLevel::Graduate),
            skills: vec!["Python".to_string()],
            sector_interests: vec!["Technology".to_string()],
            location_preference: "Bangalore".to_string(),
            remote_work_preference: true,
            experience_level: ExperienceLevel::Beginner,
            career_goal: None,
        }
    }

    fn scorer() -> WeightedMatchScorer {
        WeightedMatchScorer::new(vec![SectorDefinition {
            id: "Technology".to_string(),
            name: "Technology".to_string(),
            keywords: vec!["software".to_string()],
        }])
    }

    /// A posting that shares nothing with `candidate()`.
    fn unrelated(title: &str) -> InternshipPosting {
        InternshipPosting {
            title: title.to_string(),
            sector: "Agriculture".to_string(),
            skills_required: vec!["Farming".to_string()],
            location: "Lucknow".to_string(),
            remote_work: false,
            education_level: EducationLevel::PhD,
            experience_level: ExperienceLevel::Advanced,
            ..Default::default()
        }
    }

    #[test]
    fn test_single_posting_reports_87_5() {
        let catalog = vec![posting("Backend Intern", EducationLevel::Graduate, &["Python", "SQL"])];
        let ranked = rank(&scorer(), &candidate(), &catalog, 5);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].match_score, 87.5);
        assert_eq!(ranked[0].skills_match_percentage, 50.0);
    }

    #[test]
    fn test_rank_sorted_non_increasing_and_bounded_by_limit() {
        let catalog = vec![
            posting("A", EducationLevel::PhD, &["Python"]),
            posting("B", EducationLevel::Graduate, &["Python"]),
            posting("C", EducationLevel::Graduate, &["Python", "SQL", "Git"]),
            posting("D", EducationLevel::PostGraduate, &[]),
        ];
        let ranked = rank(&scorer(), &candidate(), &catalog, 3);
        assert_eq!(ranked.len(), 3);
        assert!(ranked
            .windows(2)
            .all(|w| w[0].match_score >= w[1].match_score));
        assert_eq!(ranked[0].internship.title, "B");
    }

    #[test]
    fn test_floor_applies_after_truncation() {
        let catalog = vec![unrelated("X"), unrelated("Y")];
        let ranked = rank(&scorer(), &candidate(), &catalog, 5);
        assert!(ranked.is_empty(), "got {:?}", ranked);
    }

    #[test]
    fn test_entries_beyond_limit_are_never_promoted() {
        let catalog = vec![
            posting("Good", EducationLevel::Graduate, &["Python"]),
            unrelated("Poor"),
            posting("Also good", EducationLevel::Graduate, &["Python"]),
        ];
        let ranked = rank(&scorer(), &candidate(), &catalog, 1);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].internship.title, "Good");
    }

    #[test]
    fn test_equal_scores_keep_catalog_order() {
        let catalog = vec![
            posting("First", EducationLevel::Graduate, &["Python"]),
            posting("Second", EducationLevel::Graduate, &["Python"]),
        ];
        let ranked = rank(&scorer(), &candidate(), &catalog, 2);
        assert_eq!(ranked[0].internship.title, "First");
        assert_eq!(ranked[1].internship.title, "Second");
    }

    #[test]
    fn test_zero_limit_returns_nothing() {
        let catalog = vec![posting("A", EducationLevel::Graduate, &["Python"])];
        assert!(rank(&scorer(), &candidate(), &catalog, 0).is_empty());
    }

    #[test]
    fn test_explain_caps_at_three_in_priority_order() {
        let p = posting("Backend Intern", EducationLevel::Graduate, &["Python", "SQL"]);
        let reasons = explain(&candidate(), &p);
        assert_eq!(
            reasons,
            vec![
                "Your education level matches the requirement".to_string(),
                "You have relevant skills: Python".to_string(),
                "Matches your interest in Technology".to_string(),
            ]
        );
    }

    #[test]
    fn test_explain_names_at_most_three_skills() {
        let mut c = candidate();
        c.education_level = None;
        c.skills = ["Python", "SQL", "Git", "Docker"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let p = posting("X", EducationLevel::Graduate, &["Python", "SQL", "Git", "Docker"]);
        let reasons = explain(&c, &p);
        assert_eq!(reasons[0], "You have relevant skills: Python, SQL, Git");
    }

    #[test]
    fn test_explain_remote_and_goal_reasons() {
        let c = CandidateProfile {
            location_preference: "Kolkata".to_string(),
            remote_work_preference: true,
            career_goal: Some("Software Developer".to_string()),
            experience_level: ExperienceLevel::Advanced,
            ..Default::default()
        };
        let mut p = posting("Software Intern", EducationLevel::Graduate, &[]);
        p.sector = "Government".to_string();
        let reasons = explain(&c, &p);
        assert_eq!(
            reasons,
            vec![
                "Offers remote work as per your preference".to_string(),
                "Aligns with your career goal: Software Developer".to_string(),
            ]
        );
    }

    #[test]
    fn test_scored_match_serializes_flat() {
        let catalog = vec![posting("Backend Intern", EducationLevel::Graduate, &["Python"])];
        let ranked = rank(&scorer(), &candidate(), &catalog, 1);
        let json = serde_json::to_value(&ranked[0]).unwrap();
        assert_eq!(json["title"], "Backend Intern");
        assert_eq!(json["match_score"], 100.0);
        assert!(json["match_reasons"].is_array());
    }
}
