//! HTTP handlers for the location registry

use axum::{extract::State, Json};
use serde::Serialize;
use shared::LocationRegistry;

use crate::AppState;

#[derive(Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<String>,
    pub location_data: LocationRegistry,
}

/// List all surf locations
pub async fn list_locations(State(state): State<AppState>) -> Json<LocationsResponse> {
    let locations = state
        .registry
        .list_locations()
        .into_iter()
        .map(str::to_string)
        .collect();

    Json(LocationsResponse {
        locations,
        location_data: state.registry.as_ref().clone(),
    })
}
