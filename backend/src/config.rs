//! Configuration management for WaveView
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (API keys fall back to `SURF_API_KEY` /
//!    `OPENAI_API_KEY`, then to placeholder strings)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with WAVEVIEW__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Placeholder used when no marine API key is configured
pub const SURF_API_KEY_PLACEHOLDER: &str = "your-surf-api-key-here";

/// Placeholder used when no text-generation API key is configured
pub const OPENAI_API_KEY_PLACEHOLDER: &str = "your-openai-api-key-here";

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Marine data provider configuration
    pub marine: MarineConfig,

    /// Text-generation service configuration
    pub narrative: NarrativeConfig,

    /// Synthetic conditions configuration
    #[serde(default)]
    pub synthetic: SyntheticConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory holding index.html and other static assets
    pub static_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MarineConfig {
    /// Point-conditions endpoint
    pub api_endpoint: String,

    /// Sent verbatim in the Authorization header
    pub api_key: String,

    /// Which upstream model's values to read from each metric
    pub source: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NarrativeConfig {
    /// Base URL of the chat completions API
    pub api_endpoint: String,

    /// Bearer token
    pub api_key: String,

    pub model: String,

    pub max_tokens: u32,

    pub temperature: f64,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SyntheticConfig {
    /// Fixed seed for reproducible fallback data
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct LoggingConfig {
    /// Emit JSON log lines instead of the human-readable format
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("WAVEVIEW_ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let marine = MarineConfig::default();
        let narrative = NarrativeConfig::default();
        let server = ServerConfig::default();

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", i64::from(server.port))?
            .set_default("server.host", server.host)?
            .set_default("server.static_dir", server.static_dir)?
            .set_default("marine.api_endpoint", marine.api_endpoint)?
            .set_default(
                "marine.api_key",
                legacy_key("SURF_API_KEY", SURF_API_KEY_PLACEHOLDER),
            )?
            .set_default("marine.source", marine.source)?
            .set_default("marine.timeout_secs", marine.timeout_secs as i64)?
            .set_default("narrative.api_endpoint", narrative.api_endpoint)?
            .set_default(
                "narrative.api_key",
                legacy_key("OPENAI_API_KEY", OPENAI_API_KEY_PLACEHOLDER),
            )?
            .set_default("narrative.model", narrative.model)?
            .set_default("narrative.max_tokens", i64::from(narrative.max_tokens))?
            .set_default("narrative.temperature", narrative.temperature)?
            .set_default("narrative.timeout_secs", narrative.timeout_secs as i64)?
            // Load environment-specific config file
            .add_source(
                File::with_name(&format!("config/{}", environment)).required(false),
            )
            // Override with environment variables (WAVEVIEW prefix)
            .add_source(
                Environment::with_prefix("WAVEVIEW")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

/// Read one of the unprefixed API key variables, or return the placeholder
fn legacy_key(var: &str, placeholder: &str) -> String {
    std::env::var(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| placeholder.to_string())
}

impl MarineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl NarrativeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

impl Default for MarineConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.stormglass.io/v2/weather/point".to_string(),
            api_key: SURF_API_KEY_PLACEHOLDER.to_string(),
            source: "noaa".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://api.openai.com/v1".to_string(),
            api_key: OPENAI_API_KEY_PLACEHOLDER.to_string(),
            model: "gpt-3.5-turbo".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 10,
        }
    }
}
