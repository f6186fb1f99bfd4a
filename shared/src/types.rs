//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// The eight compass points used for wave, swell and wind directions
pub const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Convert a bearing in degrees to the nearest 8-point compass direction
///
/// Any finite bearing is accepted and normalised into [0, 360). Non-finite
/// input falls back to "N".
pub fn degrees_to_compass(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return COMPASS_POINTS[0];
    }
    let normalised = degrees.rem_euclid(360.0);
    let sector = ((normalised + 22.5) / 45.0).floor() as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}

/// Where a conditions record came from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConditionsSource {
    /// Parsed from the marine-data provider
    Live,
    /// Fabricated by the synthetic generator after a provider failure
    Synthetic,
}

impl ConditionsSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConditionsSource::Live => "live",
            ConditionsSource::Synthetic => "synthetic",
        }
    }
}

impl std::fmt::Display for ConditionsSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_compass_cardinals() {
        assert_eq!(degrees_to_compass(0.0), "N");
        assert_eq!(degrees_to_compass(90.0), "E");
        assert_eq!(degrees_to_compass(180.0), "S");
        assert_eq!(degrees_to_compass(270.0), "W");
        assert_eq!(degrees_to_compass(225.0), "SW");
    }

    #[test]
    fn test_degrees_to_compass_wraps() {
        assert_eq!(degrees_to_compass(359.0), "N");
        assert_eq!(degrees_to_compass(360.0), "N");
        assert_eq!(degrees_to_compass(-45.0), "NW");
        assert_eq!(degrees_to_compass(337.4), "NW");
        assert_eq!(degrees_to_compass(337.5), "N");
        assert_eq!(degrees_to_compass(f64::NAN), "N");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.14159, 1), 3.1);
        assert_eq!(round_to(1.005, 0), 1.0);
        assert_eq!(round_to(-0.456, 2), -0.46);
    }

    #[test]
    fn test_source_serializes_lowercase() {
        let json = serde_json::to_string(&ConditionsSource::Synthetic).unwrap();
        assert_eq!(json, "\"synthetic\"");
        assert_eq!(ConditionsSource::Live.to_string(), "live");
    }
}
