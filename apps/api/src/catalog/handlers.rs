//! Read-only catalog listings.

use axum::{extract::State, Json};

use crate::catalog::models::{InternshipPosting, SectorDefinition};
use crate::state::AppState;

/// GET /api/sectors
pub async fn handle_list_sectors(State(state): State<AppState>) -> Json<Vec<SectorDefinition>> {
    Json(state.catalog.sectors.clone())
}

/// GET /api/skills
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.skills.clone())
}

/// GET /api/internships
pub async fn handle_list_internships(
    State(state): State<AppState>,
) -> Json<Vec<InternshipPosting>> {
    Json(state.catalog.internships.clone())
}
