//! Domain models for WaveView

mod conditions;
mod location;
mod narrative;
mod ranking;

pub use conditions::*;
pub use location::*;
pub use narrative::*;
pub use ranking::*;
