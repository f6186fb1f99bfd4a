//! Business logic services for WaveView

pub mod conditions;
pub mod narrative;
pub mod rankings;

pub use conditions::{ConditionsService, RandomSource};
pub use narrative::NarrativeService;
pub use rankings::RankingsService;
