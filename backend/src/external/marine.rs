//! Marine data API client
//!
//! Integrates with a Stormglass-style point endpoint: one GET per location
//! for today's date, returning a `data` array of hourly points. Each metric
//! in a point maps upstream model names to values, e.g.
//! `{"waveHeight": {"noaa": 1.2, "sg": 1.3}}`.

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shared::{defaults, degrees_to_compass, ConditionsRecord, Location};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::MarineConfig;
use crate::error::AppError;

/// Metrics requested from the provider
pub const REQUESTED_PARAMS: [&str; 7] = [
    "waveHeight",
    "wavePeriod",
    "waveDirection",
    "windSpeed",
    "windDirection",
    "airTemperature",
    "waterTemperature",
];

/// Marine provider failures
#[derive(Error, Debug)]
pub enum MarineError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<MarineError> for AppError {
    fn from(err: MarineError) -> Self {
        AppError::ProviderError(err.to_string())
    }
}

/// Marine data API client
#[derive(Clone)]
pub struct MarineClient {
    client: Client,
    api_key: String,
    endpoint: String,
    source: String,
}

/// Point response body
#[derive(Debug, Deserialize)]
struct PointResponse {
    data: Vec<HashMap<String, Value>>,
}

/// Metrics read from the first data point, before defaults are applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarineReading {
    pub wave_height: Option<f64>,
    pub wave_period: Option<f64>,
    pub wave_direction: Option<String>,
    pub wind_speed: Option<f64>,
    pub wind_direction: Option<String>,
    pub air_temperature: Option<f64>,
}

impl MarineReading {
    /// Fill missing metrics with defaults and build a full record
    ///
    /// Swell mirrors the wave values and tide height is a constant.
    pub fn into_record(self, location_name: &str, timestamp: DateTime<Utc>) -> ConditionsRecord {
        let wave_height = self.wave_height.unwrap_or(defaults::WAVE_HEIGHT_FT);
        let wave_period = self.wave_period.unwrap_or(defaults::WAVE_PERIOD_S);
        let wave_direction = self
            .wave_direction
            .unwrap_or_else(|| defaults::WAVE_DIRECTION.to_string());

        ConditionsRecord {
            location_name: location_name.to_string(),
            wave_height,
            wave_period,
            swell_direction: wave_direction.clone(),
            wave_direction,
            wind_speed: self.wind_speed.unwrap_or(defaults::WIND_SPEED_MPH),
            wind_direction: self
                .wind_direction
                .unwrap_or_else(|| defaults::WIND_DIRECTION.to_string()),
            temperature: self.air_temperature.unwrap_or(defaults::TEMPERATURE_C),
            swell_height: wave_height,
            swell_period: wave_period,
            tide_height: defaults::TIDE_HEIGHT_FT,
            timestamp,
        }
    }
}

impl MarineClient {
    /// Create a new MarineClient from configuration
    pub fn new(config: &MarineConfig) -> Result<Self, MarineError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: config.api_endpoint.clone(),
            source: config.source.clone(),
        })
    }

    /// Fetch the current reading for a location
    ///
    /// Exactly one request is made; `start` and `end` are both `date`.
    pub async fn fetch_current(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<MarineReading, MarineError> {
        let day = date.format("%Y-%m-%d").to_string();
        let params = REQUESTED_PARAMS.join(",");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("lat", location.lat.to_string()),
                ("lng", location.lon.to_string()),
                ("params", params),
                ("start", day.clone()),
                ("end", day),
            ])
            .header("Authorization", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(MarineError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let body: PointResponse = serde_json::from_slice(&bytes)?;

        Ok(body
            .data
            .first()
            .map(|point| self.read_point(point))
            .unwrap_or_default())
    }

    fn read_point(&self, point: &HashMap<String, Value>) -> MarineReading {
        MarineReading {
            wave_height: self.number(point, "waveHeight"),
            wave_period: self.number(point, "wavePeriod"),
            wave_direction: self.direction(point, "waveDirection"),
            wind_speed: self.number(point, "windSpeed"),
            wind_direction: self.direction(point, "windDirection"),
            air_temperature: self.number(point, "airTemperature"),
        }
    }

    fn metric<'a>(&self, point: &'a HashMap<String, Value>, name: &str) -> Option<&'a Value> {
        point.get(name)?.get(&self.source)
    }

    fn number(&self, point: &HashMap<String, Value>, name: &str) -> Option<f64> {
        self.metric(point, name)?.as_f64()
    }

    /// Directions arrive as degrees; already-named directions pass through
    fn direction(&self, point: &HashMap<String, Value>, name: &str) -> Option<String> {
        match self.metric(point, name)? {
            Value::Number(n) => n.as_f64().map(|deg| degrees_to_compass(deg).to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
