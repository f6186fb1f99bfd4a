//! Surf location registry

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use thiserror::Error;

/// A named surf spot
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub description: String,
}

impl Location {
    pub fn new(id: &str, name: &str, lat: f64, lon: f64, description: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            lat,
            lon,
            description: description.to_string(),
        }
    }
}

/// Registry lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Location {0} not found")]
    UnknownLocation(String),
}

/// Fixed, ordered set of surf locations
///
/// Built once at startup and shared read-only. Iteration order is the
/// insertion order of the entries and never changes.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    entries: Vec<Location>,
}

impl LocationRegistry {
    /// The five spots WaveView ships with
    pub fn builtin() -> Self {
        Self::from_locations(vec![
            Location::new(
                "malibu",
                "Malibu",
                34.0370,
                -118.6770,
                "Famous point break in Southern California",
            ),
            Location::new(
                "pipeline",
                "Pipeline",
                21.6644,
                -158.0533,
                "World-famous reef break on North Shore",
            ),
            Location::new(
                "teahupoo",
                "Teahupoo",
                -17.8444,
                -149.2672,
                "Heavy reef break known for massive barrels",
            ),
            Location::new(
                "waimea",
                "Waimea Bay",
                21.6389,
                -158.0667,
                "Big wave spot on North Shore",
            ),
            Location::new(
                "jaws",
                "Jaws (Peahi)",
                20.9333,
                -156.3000,
                "Epic big wave spot on Maui",
            ),
        ])
    }

    /// Build a registry from an explicit list, dropping later duplicates of an id
    pub fn from_locations(locations: Vec<Location>) -> Self {
        let mut entries: Vec<Location> = Vec::with_capacity(locations.len());
        for location in locations {
            if !entries.iter().any(|e| e.id == location.id) {
                entries.push(location);
            }
        }
        Self { entries }
    }

    /// Location identifiers in registry order
    pub fn list_locations(&self) -> Vec<&str> {
        self.entries.iter().map(|l| l.id.as_str()).collect()
    }

    /// Look up a location by identifier
    pub fn get_location(&self, id: &str) -> Result<&Location, RegistryError> {
        self.entries
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| RegistryError::UnknownLocation(id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Serializes as a JSON object keyed by location id, in registry order
impl Serialize for LocationRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for location in &self.entries {
            map.serialize_entry(&location.id, location)?;
        }
        map.end()
    }
}
