//! WaveView - Backend Server
//!
//! Serves surf conditions, rankings and narrative reports for a handful of
//! famous surf spots, plus the static landing page.

use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waveview_backend::{config::LoggingConfig, create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    init_tracing(&config.logging);

    tracing::info!("Starting WaveView Server");
    tracing::info!("Environment: {}", config.environment);
    if config.is_development() {
        tracing::debug!("Marine endpoint: {}", config.marine.api_endpoint);
        tracing::debug!("Narrative endpoint: {}", config.narrative.api_endpoint);
    }
    if let Some(seed) = config.synthetic.seed {
        tracing::info!("Synthetic conditions seeded with {}", seed);
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::new(config)?;
    tracing::info!("Registered {} surf locations", state.registry.len());

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        "waveview_server=debug,waveview_backend=debug,tower_http=debug".into()
    });
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
