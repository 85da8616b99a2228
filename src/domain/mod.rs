//! Domain model: the room envelope, run parameters, and run results
//! exchanged with the editor and reporting collaborators.

pub mod presets;
pub mod room;
pub mod run;

pub use presets::{PresetCatalog, GLAZING_PRESETS, INFILTRATION_PRESETS, WALL_PRESETS};
pub use room::{Opening, OpeningKind, Orientation, RoomConfig, WallUValues};
pub use run::{HeatingMode, RunSummary, SimulationConfig, SimulationResult, SimulationStep};
