//! WaveView - Backend Server
//!
//! Fetches marine conditions for a fixed set of surf spots, scores and ranks
//! them, and asks a text-generation service to narrate the conditions.

use axum::Router;
use shared::LocationRegistry;
use std::{path::Path, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use error::{AppError, AppResult};
use external::{MarineClient, NarrativeClient};
use services::{ConditionsService, NarrativeService, RandomSource, RankingsService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<LocationRegistry>,
    pub conditions: ConditionsService,
    pub rankings: RankingsService,
    pub narrative: NarrativeService,
}

impl AppState {
    /// Build state with the built-in location registry
    pub fn new(config: Config) -> AppResult<Self> {
        Self::with_registry(config, LocationRegistry::builtin())
    }

    pub fn with_registry(config: Config, registry: LocationRegistry) -> AppResult<Self> {
        let registry = Arc::new(registry);

        let marine = MarineClient::new(&config.marine)
            .map_err(|e| AppError::Configuration(format!("marine client: {}", e)))?;
        let narrative = NarrativeClient::new(&config.narrative)
            .map_err(|e| AppError::Configuration(format!("narrative client: {}", e)))?;

        let conditions = ConditionsService::new(
            registry.clone(),
            marine,
            RandomSource::from_seed(config.synthetic.seed),
        );

        Ok(Self {
            config: Arc::new(config),
            registry,
            rankings: RankingsService::new(conditions.clone()),
            conditions,
            narrative: NarrativeService::new(narrative),
        })
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_dir = Path::new(&state.config.server.static_dir).to_path_buf();
    let index = static_dir.join("index.html");

    Router::new()
        .route_service("/", ServeFile::new(index))
        .nest_service("/static", ServeDir::new(static_dir))
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
