//! External API integrations

pub mod marine;
pub mod narrative;

pub use marine::{MarineClient, MarineError, MarineReading};
pub use narrative::{NarrativeClient, NarrativeError};
