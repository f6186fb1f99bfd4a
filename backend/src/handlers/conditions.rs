//! HTTP handlers for surf conditions

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::error::AppResult;
use crate::AppState;

/// Response header naming where the conditions came from (`live` or `synthetic`)
pub const CONDITIONS_SOURCE_HEADER: &str = "x-conditions-source";

/// Get current conditions for a location
pub async fn get_surf_data(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let conditions = state.conditions.fetch_conditions(&location_id).await?;

    Ok((
        [(CONDITIONS_SOURCE_HEADER, conditions.source.as_str())],
        Json(conditions.record),
    ))
}
