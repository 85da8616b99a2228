use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use uuid::Uuid;
use validator::Validate;

use super::room::RoomConfig;

/// Heater control strategy.
///
/// `Schedule` is accepted on the wire but has no control behavior of its own
/// yet; the controller currently drives it like `FixedPower`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum HeatingMode {
    Thermostat,
    FixedPower,
    Schedule,
}

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Total simulated time span, hours.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub duration_hours: f64,
    /// Integration step size, minutes. The duration need not be an exact
    /// multiple; the final sample lands on the step grid, not the nominal
    /// end time.
    #[validate(range(exclusive_min = 0.0, message = "must be positive"))]
    pub time_step_minutes: f64,
    /// Indoor temperature at t = 0, °C.
    pub initial_temp: f64,
    /// Thermostat setpoint, °C.
    pub target_temp: f64,
    /// Maximum sustained heater output, kW.
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub heater_power: f64,
    pub heating_mode: HeatingMode,
    /// Daytime extreme of the synthetic diurnal outdoor cycle, °C.
    pub outdoor_temp_day: f64,
    /// Nighttime extreme of the synthetic diurnal outdoor cycle, °C.
    pub outdoor_temp_night: f64,
}

impl Default for SimulationConfig {
    /// The run a fresh editor session starts from: 24 h at 15-minute steps,
    /// warming an 18 °C room to a 21 °C setpoint with a 3 kW heater.
    fn default() -> Self {
        Self {
            duration_hours: 24.0,
            time_step_minutes: 15.0,
            initial_temp: 18.0,
            target_temp: 21.0,
            heater_power: 3.0,
            heating_mode: HeatingMode::Thermostat,
            outdoor_temp_day: 12.0,
            outdoor_temp_night: 2.0,
        }
    }
}

/// One sample of the simulated trajectory.
///
/// Every numeric field is rounded to two decimals at emission; downstream
/// aggregates read these rounded values, not the engine's internal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationStep {
    /// Elapsed time, hours.
    pub time: f64,
    /// Indoor temperature, °C.
    pub indoor_temp: f64,
    /// Outdoor temperature, °C.
    pub outdoor_temp: f64,
    /// Heater output, kW.
    pub heating_power: f64,
    /// Fabric conduction loss (walls + roof + floor + openings), kW.
    pub heat_loss_conduction: f64,
    /// Infiltration loss, kW.
    pub heat_loss_ventilation: f64,
    /// Solar gain through glazing, kW.
    pub heat_gain_solar: f64,
    /// Cumulative heater energy up to and including this step, kWh.
    pub total_energy: f64,
}

/// Summary statistics reduced from a step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Heater energy over the whole run, kWh.
    pub total_energy_kwh: f64,
    /// Peak combined conduction + ventilation loss, kW. Solar gain is
    /// excluded: this measures worst-case load, not net balance.
    pub max_heat_loss_kw: f64,
    /// Unweighted mean indoor temperature, °C.
    pub average_temp_c: f64,
}

/// The immutable product of one simulation run.
///
/// Carries snapshot copies of both input configs so the result stays
/// self-describing after the live configuration is edited further.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub data: Vec<SimulationStep>,
    pub total_energy_consumption: f64,
    pub max_heat_loss: f64,
    pub average_temp: f64,
    pub room: RoomConfig,
    pub config: SimulationConfig,
}

impl SimulationResult {
    pub fn new(
        room: &RoomConfig,
        config: &SimulationConfig,
        data: Vec<SimulationStep>,
        summary: RunSummary,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            data,
            total_energy_consumption: summary.total_energy_kwh,
            max_heat_loss: summary.max_heat_loss_kw,
            average_temp: summary.average_temp_c,
            room: room.clone(),
            config: config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let config = SimulationConfig {
            duration_hours: 0.0,
            ..Default::default()
        };
        let errors = config.validate().unwrap_err();
        assert!(errors.to_string().contains("duration_hours"));
    }

    #[test]
    fn test_negative_heater_power_rejected() {
        let config = SimulationConfig {
            heater_power: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_heating_mode_wire_names() {
        assert_eq!(
            serde_json::to_value(HeatingMode::Thermostat).unwrap(),
            "Thermostat"
        );
        assert_eq!(
            serde_json::to_value(HeatingMode::FixedPower).unwrap(),
            "FixedPower"
        );
        assert_eq!(
            serde_json::to_value(HeatingMode::Schedule).unwrap(),
            "Schedule"
        );
    }

    #[test]
    fn test_step_wire_field_names_match_editor() {
        let step = SimulationStep {
            time: 0.25,
            indoor_temp: 18.5,
            outdoor_temp: 3.1,
            heating_power: 2.4,
            heat_loss_conduction: 0.9,
            heat_loss_ventilation: 0.3,
            heat_gain_solar: 0.0,
            total_energy: 0.6,
        };
        let json = serde_json::to_value(&step).unwrap();

        for key in [
            "time",
            "indoorTemp",
            "outdoorTemp",
            "heatingPower",
            "heatLossConduction",
            "heatLossVentilation",
            "heatGainSolar",
            "totalEnergy",
        ] {
            assert!(json.get(key).is_some(), "missing wire field {key}");
        }
    }
}
