//! Route definitions for WaveView

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes (mounted under /api)
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/locations", get(handlers::list_locations))
        .route("/surf-data/:location_id", get(handlers::get_surf_data))
        .route("/analysis/:location_id", get(handlers::get_surf_analysis))
        .route("/rankings", get(handlers::get_surf_rankings))
}
