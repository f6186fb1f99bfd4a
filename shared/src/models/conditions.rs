//! Surf conditions record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::ConditionsSource;

/// Defaults substituted for metrics the marine provider leaves out
pub mod defaults {
    pub const WAVE_HEIGHT_FT: f64 = 3.0;
    pub const WAVE_PERIOD_S: f64 = 10.0;
    pub const WAVE_DIRECTION: &str = "SW";
    pub const WIND_SPEED_MPH: f64 = 10.0;
    pub const WIND_DIRECTION: &str = "NW";
    pub const TEMPERATURE_C: f64 = 20.0;
    /// The provider's tide data is not consulted
    pub const TIDE_HEIGHT_FT: f64 = 0.5;
}

/// Current conditions at a surf spot
///
/// Every field is populated whether the data came from the provider or the
/// synthetic generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionsRecord {
    pub location_name: String,
    /// Feet
    pub wave_height: f64,
    /// Seconds
    pub wave_period: f64,
    pub wave_direction: String,
    /// Miles per hour
    pub wind_speed: f64,
    pub wind_direction: String,
    /// Degrees Celsius
    pub temperature: f64,
    /// Feet relative to datum, may be negative
    pub tide_height: f64,
    pub swell_height: f64,
    pub swell_period: f64,
    pub swell_direction: String,
    pub timestamp: DateTime<Utc>,
}

impl ConditionsRecord {
    /// A record made entirely of provider defaults
    pub fn with_defaults(location_name: &str) -> Self {
        Self {
            location_name: location_name.to_string(),
            wave_height: defaults::WAVE_HEIGHT_FT,
            wave_period: defaults::WAVE_PERIOD_S,
            wave_direction: defaults::WAVE_DIRECTION.to_string(),
            wind_speed: defaults::WIND_SPEED_MPH,
            wind_direction: defaults::WIND_DIRECTION.to_string(),
            temperature: defaults::TEMPERATURE_C,
            tide_height: defaults::TIDE_HEIGHT_FT,
            swell_height: defaults::WAVE_HEIGHT_FT,
            swell_period: defaults::WAVE_PERIOD_S,
            swell_direction: defaults::WAVE_DIRECTION.to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// A conditions record tagged with its origin
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    pub record: ConditionsRecord,
    pub source: ConditionsSource,
}

impl Conditions {
    pub fn live(record: ConditionsRecord) -> Self {
        Self {
            record,
            source: ConditionsSource::Live,
        }
    }

    pub fn synthetic(record: ConditionsRecord) -> Self {
        Self {
            record,
            source: ConditionsSource::Synthetic,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source == ConditionsSource::Synthetic
    }
}
