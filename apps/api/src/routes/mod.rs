pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::errors::AppError;
use crate::market::handlers as market;
use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog
        .route("/api/sectors", get(catalog::handle_list_sectors))
        .route("/api/skills", get(catalog::handle_list_skills))
        .route("/api/internships", get(catalog::handle_list_internships))
        // Matching
        .route(
            "/api/recommendations",
            post(matching::handle_recommendations),
        )
        .route(
            "/api/recommendations/from-resume",
            post(matching::handle_recommendations_from_resume),
        )
        .route(
            "/api/suggestions/sectors",
            post(matching::handle_suggest_sectors),
        )
        .route(
            "/api/suggestions/skills",
            post(matching::handle_suggest_skills),
        )
        // Resume
        .route("/api/extract-skills", post(resume::handle_extract_skills))
        // Market
        .route(
            "/api/goal-requirements",
            post(market::handle_goal_requirements),
        )
        .route("/api/market/analysis", get(market::handle_market_analysis))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
