//! Axum route handlers for market demand.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::market::{MarketDemand, SkillMarketAnalysis};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GoalRequirementsRequest {
    #[serde(default)]
    pub goal: String,
}

/// POST /api/goal-requirements
pub async fn handle_goal_requirements(
    State(state): State<AppState>,
    payload: Result<Json<GoalRequirementsRequest>, JsonRejection>,
) -> Result<Json<MarketDemand>, AppError> {
    let Json(req) = payload?;
    let goal = req.goal.trim();
    if goal.is_empty() {
        return Err(AppError::Validation("Goal is required".to_string()));
    }

    let demand = state.market.demand_for(goal);
    info!(
        goal,
        role = demand.market_analysis.role.as_deref().unwrap_or("general"),
        "Goal requirements computed"
    );
    Ok(Json(demand))
}

/// GET /api/market/analysis
pub async fn handle_market_analysis(State(state): State<AppState>) -> Json<SkillMarketAnalysis> {
    Json(state.market.overview())
}
