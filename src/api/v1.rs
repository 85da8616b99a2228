use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use super::error::ApiError;
use crate::{
    domain::{PresetCatalog, RoomConfig, SimulationConfig, SimulationResult},
    simulation,
};

pub fn router() -> Router {
    Router::new()
        .route("/simulation/run", post(run_simulation))
        .route("/presets", get(get_presets))
        .route("/defaults", get(get_defaults))
        .route("/healthz", get(healthz))
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// Request body for one simulation run: the room under edit plus the run
/// parameters, exactly as the editor holds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
    pub room: RoomConfig,
    pub config: SimulationConfig,
}

/// Validates the configuration at the boundary, then executes the pure
/// engine. The engine itself never rejects input; everything physically
/// nonsensical is stopped here.
pub async fn run_simulation(
    Json(req): Json<RunRequest>,
) -> Result<Json<SimulationResult>, ApiError> {
    req.room.validate()?;
    req.config.validate()?;

    let result = simulation::run(&req.room, &req.config);
    info!(
        run_id = %result.id,
        samples = result.data.len(),
        total_energy_kwh = result.total_energy_consumption,
        "simulation run complete"
    );
    Ok(Json(result))
}

/// Seed configuration for a fresh editor session.
#[derive(Debug, Serialize)]
pub struct EditorDefaults {
    pub room: RoomConfig,
    pub config: SimulationConfig,
}

pub async fn get_defaults() -> Json<EditorDefaults> {
    Json(EditorDefaults {
        room: RoomConfig::default(),
        config: SimulationConfig::default(),
    })
}

pub async fn get_presets() -> Json<PresetCatalog> {
    Json(PresetCatalog::all())
}
