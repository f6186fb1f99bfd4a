//! HTTP handlers

pub mod analysis;
pub mod conditions;
pub mod health;
pub mod locations;
pub mod rankings;

pub use analysis::get_surf_analysis;
pub use conditions::{get_surf_data, CONDITIONS_SOURCE_HEADER};
pub use health::health_check;
pub use locations::list_locations;
pub use rankings::get_surf_rankings;
