//! HTTP handlers for narrative analysis

use axum::{
    extract::{Path, State},
    Json,
};
use shared::NarrativeReport;

use crate::error::AppResult;
use crate::AppState;

/// Get a narrative report for a location
///
/// Text-generation failures come back as the report's analysis text, not as
/// an error status.
pub async fn get_surf_analysis(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<Json<NarrativeReport>> {
    let conditions = state.conditions.fetch_conditions(&location_id).await?;
    let report = state.narrative.report(conditions.record).await;
    Ok(Json(report))
}
