//! HTTP handlers for location rankings

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::RankingEntry;

use crate::AppState;

#[derive(Serialize)]
pub struct RankingsResponse {
    pub rankings: Vec<RankingEntry>,
    pub timestamp: DateTime<Utc>,
}

/// Get surf spots ranked by current conditions
pub async fn get_surf_rankings(State(state): State<AppState>) -> Json<RankingsResponse> {
    let rankings = state.rankings.build_rankings().await;

    Json(RankingsResponse {
        rankings,
        timestamp: Utc::now(),
    })
}
