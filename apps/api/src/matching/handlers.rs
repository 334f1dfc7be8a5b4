//! Axum route handlers for recommendations and suggestions.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::matching::ranker::{rank, ScoredMatch};
use crate::matching::suggestions::{suggest_sectors, suggest_skills};
use crate::models::candidate::{CandidateProfile, EducationLevel, ExperienceLevel};
use crate::resume::upload::ResumeUpload;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// JSON body of `POST /api/recommendations`. Required fields are optional
/// here so a missing field becomes a validation error, not a decode error.
#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub education_level: Option<String>,
    pub skills: Option<Vec<String>>,
    pub sector_interests: Option<Vec<String>>,
    #[serde(default)]
    pub location_preference: String,
    #[serde(default)]
    pub remote_work_preference: bool,
    pub experience_level: Option<String>,
    pub career_goal: Option<String>,
    pub num_recommendations: Option<usize>,
}

impl RecommendationRequest {
    pub fn into_profile(self) -> Result<CandidateProfile, AppError> {
        let education_level = self
            .education_level
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| missing_field("education_level"))?;

        let mut profile = CandidateProfile {
            education_level: Some(EducationLevel::from(education_level)),
            skills: self.skills.unwrap_or_default(),
            sector_interests: self.sector_interests.unwrap_or_default(),
            location_preference: self.location_preference,
            remote_work_preference: self.remote_work_preference,
            experience_level: self
                .experience_level
                .map(ExperienceLevel::from)
                .unwrap_or_default(),
            career_goal: self.career_goal,
        };
        profile.dedup();

        if profile.skills.is_empty() {
            return Err(missing_field("skills"));
        }
        if profile.sector_interests.is_empty() {
            return Err(missing_field("sector_interests"));
        }
        Ok(profile)
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<ScoredMatch>,
    pub total_found: usize,
    pub candidate_profile: CandidateProfile,
}

#[derive(Debug, Deserialize)]
pub struct SectorSuggestionRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SkillSuggestionRequest {
    #[serde(default)]
    pub sector_interests: Vec<String>,
}

fn missing_field(name: &str) -> AppError {
    AppError::Validation(format!("Missing required field: {name}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Form parsing (from-resume)
// ────────────────────────────────────────────────────────────────────────────

/// A JSON string array, or else a comma-separated list.
fn parse_list(raw: &str) -> Vec<String> {
    serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|_| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    })
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

fn parse_limit(raw: Option<&str>, default: usize) -> Result<usize, AppError> {
    match raw {
        None => Ok(default),
        Some(raw) => raw.parse::<usize>().map_err(|_| {
            AppError::Validation(format!(
                "num_recommendations must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}

fn profile_from_form(upload: &ResumeUpload, skills: Vec<String>) -> CandidateProfile {
    let mut profile = CandidateProfile {
        education_level: upload.field("education_level").map(EducationLevel::from),
        skills,
        sector_interests: upload
            .field("sector_interests")
            .map(parse_list)
            .unwrap_or_default(),
        location_preference: upload
            .field("location_preference")
            .unwrap_or_default()
            .to_string(),
        remote_work_preference: upload
            .field("remote_work_preference")
            .is_some_and(parse_flag),
        experience_level: upload
            .field("experience_level")
            .map(ExperienceLevel::from)
            .unwrap_or_default(),
        career_goal: upload.field("career_goal").map(str::to_string),
    };
    profile.dedup();
    profile
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

fn recommend(state: &AppState, profile: CandidateProfile, limit: usize) -> RecommendationsResponse {
    let recommendations = rank(
        state.scorer.as_ref(),
        &profile,
        &state.catalog.internships,
        limit,
    );
    info!(
        scorer = state.scorer.name(),
        limit,
        found = recommendations.len(),
        "Recommendations ranked"
    );
    RecommendationsResponse {
        total_found: recommendations.len(),
        recommendations,
        candidate_profile: profile,
    }
}

/// POST /api/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Json(req) = payload?;
    let limit = req
        .num_recommendations
        .unwrap_or(state.config.default_recommendations);
    let profile = req.into_profile()?;
    Ok(Json(recommend(&state, profile, limit)))
}

/// POST /api/recommendations/from-resume
///
/// Skills come from the uploaded document; every other profile field comes
/// from the optional form fields.
pub async fn handle_recommendations_from_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let upload = ResumeUpload::from_multipart(multipart).await?;
    let limit = parse_limit(
        upload.field("num_recommendations"),
        state.config.default_recommendations,
    )?;

    let skills = upload
        .parse(state.resume_parser.clone(), |parser, path| {
            parser.extract_skills(path)
        })
        .await?;
    info!(
        file_name = %upload.file_name,
        skills = skills.len(),
        "Skills extracted from resume"
    );

    let profile = profile_from_form(&upload, skills);
    Ok(Json(recommend(&state, profile, limit)))
}

/// POST /api/suggestions/sectors
pub async fn handle_suggest_sectors(
    payload: Result<Json<SectorSuggestionRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Json(req) = payload?;
    Ok(Json(suggest_sectors(&req.skills)))
}

/// POST /api/suggestions/skills
pub async fn handle_suggest_skills(
    payload: Result<Json<SkillSuggestionRequest>, JsonRejection>,
) -> Result<Json<Vec<String>>, AppError> {
    let Json(req) = payload?;
    Ok(Json(suggest_skills(&req.sector_interests)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn request(json: &str) -> RecommendationRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_valid_request_becomes_profile() {
        let profile = request(
            r#"{"education_level":"Post Graduate","skills":["Python","python"],
                "sector_interests":["Technology"],"remote_work_preference":true,
                "career_goal":"Data Analyst"}"#,
        )
        .into_profile()
        .unwrap();
        assert_eq!(profile.education_level, Some(EducationLevel::PostGraduate));
        assert_eq!(profile.skills, vec!["Python"]);
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert_eq!(profile.goal(), Some("Data Analyst"));
    }

    #[test]
    fn test_missing_or_empty_required_fields_are_rejected() {
        for json in [
            r#"{"skills":["Python"],"sector_interests":["Technology"]}"#,
            r#"{"education_level":" ","skills":["Python"],"sector_interests":["Technology"]}"#,
            r#"{"education_level":"Graduate","skills":[],"sector_interests":["Technology"]}"#,
            r#"{"education_level":"Graduate","skills":["Python"]}"#,
            r#"{"education_level":"Graduate","skills":["Python"],"sector_interests":[" "]}"#,
        ] {
            let err = request(json).into_profile().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{json}: {err:?}");
        }
    }

    #[test]
    fn test_parse_list_accepts_json_or_commas() {
        assert_eq!(parse_list(r#"["Technology","Finance"]"#), vec!["Technology", "Finance"]);
        assert_eq!(parse_list("Technology, Finance ,,"), vec!["Technology", "Finance"]);
    }

    #[test]
    fn test_parse_flag() {
        for yes in ["1", "true", "YES", "y"] {
            assert!(parse_flag(yes), "{yes}");
        }
        for no in ["0", "false", "no", "maybe"] {
            assert!(!parse_flag(no), "{no}");
        }
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None, 20).unwrap(), 20);
        assert_eq!(parse_limit(Some("5"), 20).unwrap(), 5);
        assert!(parse_limit(Some("five"), 20).is_err());
    }

    #[test]
    fn test_profile_from_form_defaults() {
        let upload = ResumeUpload::for_tests(HashMap::from([
            ("sector_interests".to_string(), "Technology,Finance".to_string()),
            ("remote_work_preference".to_string(), "yes".to_string()),
        ]));
        let profile = profile_from_form(&upload, vec!["Python".to_string()]);
        assert!(profile.education_level.is_none());
        assert_eq!(profile.sector_interests, vec!["Technology", "Finance"]);
        assert!(profile.remote_work_preference);
        assert_eq!(profile.experience_level, ExperienceLevel::Beginner);
        assert!(profile.career_goal.is_none());
    }
}
