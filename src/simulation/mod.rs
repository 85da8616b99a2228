//! # Room Thermal Simulation Engine
//!
//! The algorithmic core of the service. A run flows one-shot, top to bottom:
//!
//! - **geometry** reduces the room description once into per-orientation net
//!   wall areas and an aggregate opening conductance
//! - **solar** approximates irradiance on each wall for a given time of day
//! - **engine** steps the indoor temperature forward in fixed increments,
//!   deciding heater output each step from the configured control mode
//! - **summary** reduces the emitted step sequence to the run's totals
//!
//! The whole pipeline is a pure function `(RoomConfig, SimulationConfig) →
//! SimulationResult`; concurrent runs share nothing and need no
//! synchronization.

pub mod engine;
pub mod geometry;
pub mod solar;
pub mod summary;

pub use engine::run;
pub use geometry::{reduce, RoomSurfaces, WallAreas};
pub use solar::irradiance;
pub use summary::summarize;

/// Display precision applied once, when a step record is emitted.
/// Aggregates downstream read the rounded values.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
