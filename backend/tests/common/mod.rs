//! Shared helpers for integration tests

#![allow(dead_code)]

use waveview_backend::config::{
    Config, MarineConfig, NarrativeConfig, ServerConfig, SyntheticConfig,
};

pub const MARINE_PATH: &str = "/v2/weather/point";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";
pub const MARINE_KEY: &str = "test-marine-key";
pub const NARRATIVE_KEY: &str = "sk-test";

/// Config pointing both external services at mock servers
pub fn test_config(marine_uri: &str, narrative_uri: &str) -> Config {
    Config {
        environment: "test".to_string(),
        server: ServerConfig {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../static").to_string(),
            ..ServerConfig::default()
        },
        marine: MarineConfig {
            api_endpoint: format!("{}{}", marine_uri, MARINE_PATH),
            api_key: MARINE_KEY.to_string(),
            timeout_secs: 5,
            ..MarineConfig::default()
        },
        narrative: NarrativeConfig {
            api_endpoint: format!("{}/v1", narrative_uri),
            api_key: NARRATIVE_KEY.to_string(),
            timeout_secs: 5,
            ..NarrativeConfig::default()
        },
        synthetic: SyntheticConfig { seed: Some(7) },
        ..Config::default()
    }
}

/// A provider point with every metric under the `noaa` source
pub fn provider_point(
    wave_height: f64,
    wave_period: f64,
    wave_direction: f64,
    wind_speed: f64,
    wind_direction: f64,
    air_temperature: f64,
) -> serde_json::Value {
    serde_json::json!({
        "time": "2026-10-15T00:00:00+00:00",
        "waveHeight": {"noaa": wave_height, "sg": wave_height + 0.2},
        "wavePeriod": {"noaa": wave_period},
        "waveDirection": {"noaa": wave_direction},
        "windSpeed": {"noaa": wind_speed},
        "windDirection": {"noaa": wind_direction},
        "airTemperature": {"noaa": air_temperature},
        "waterTemperature": {"noaa": 21.0}
    })
}

/// Provider body wrapping the given points
pub fn provider_body(points: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "data": points,
        "meta": {"cost": 1, "dailyQuota": 10, "requestCount": 1}
    })
}

/// Chat completion body with a single choice
pub fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}
