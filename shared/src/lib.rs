//! Shared types and pure logic for WaveView
//!
//! This crate holds the surf-spot registry, the conditions record, the
//! quality scorer and the synthetic conditions generator. Nothing in here
//! performs I/O; the backend crate wires these into HTTP handlers.

pub mod models;
pub mod scoring;
pub mod synthetic;
pub mod types;

pub use models::*;
pub use scoring::*;
pub use synthetic::*;
pub use types::*;
