//! Discrete-time energy-balance integrator with thermostatic control.
//!
//! One invocation is a pure function of its two inputs: it precomputes the
//! room's conductive surfaces, then steps indoor temperature forward on a
//! fixed grid, accounting heater output, solar gain, and the loss terms at
//! every step. Nothing outside the call is read or written, so concurrent
//! runs need no coordination.

use std::f64::consts::PI;

use strum::IntoEnumIterator;

use super::{geometry, round2, solar, summary};
use crate::domain::{
    HeatingMode, OpeningKind, Orientation, RoomConfig, SimulationConfig, SimulationResult,
    SimulationStep,
};

const AIR_DENSITY_KG_M3: f64 = 1.225;
const AIR_SPECIFIC_HEAT_J_KG_K: f64 = 1005.0;
/// Lumped furnishings/internal-fabric mass on top of bare room air. Tuning
/// constant, kept literal.
const FURNISHING_MASS_FACTOR: f64 = 5.0;
/// Specific heat of air per unit volume per air change, W·h/(m³·K) folded
/// into one coefficient.
const VENTILATION_COEFF: f64 = 0.33;
/// The ground under the floor sits this far below the mean outdoor
/// temperature rather than following the diurnal swing. Tuning constant,
/// kept literal.
const GROUND_TEMP_OFFSET_C: f64 = 4.0;
/// Assumed solar heat gain coefficient for windows that don't specify one.
const DEFAULT_SHGC: f64 = 0.7;
/// The synthetic outdoor cycle peaks at 14:00.
const OUTDOOR_PEAK_HOUR: f64 = 14.0;

/// Runs one simulation: `(room, config) → result`.
///
/// Never fails. Geometry is clamped, not rejected; callers wanting hard
/// validation apply it at the boundary before invoking the engine.
/// Degenerate zero-volume rooms produce non-finite temperatures.
pub fn run(room: &RoomConfig, config: &SimulationConfig) -> SimulationResult {
    let surfaces = geometry::reduce(room);

    let volume = room.volume();
    let thermal_capacitance =
        volume * AIR_DENSITY_KG_M3 * AIR_SPECIFIC_HEAT_J_KG_K * FURNISHING_MASS_FACTOR;

    let wall_ua: f64 = Orientation::iter()
        .map(|orientation| surfaces.net_wall_areas.get(orientation) * room.wall_u(orientation))
        .sum();

    let steps = ((config.duration_hours * 60.0) / config.time_step_minutes).ceil() as u64;
    let dt_seconds = config.time_step_minutes * 60.0;
    let max_heater_watts = config.heater_power * 1000.0;

    let outdoor_average = (config.outdoor_temp_day + config.outdoor_temp_night) / 2.0;
    let ground_temp = outdoor_average - GROUND_TEMP_OFFSET_C;

    let mut indoor_temp = config.initial_temp;
    let mut total_energy_kwh = 0.0;
    let mut data = Vec::with_capacity(steps as usize + 1);

    // Samples land on the step grid, inclusive of both ends; when the
    // duration is not a multiple of the step, the last sample runs past the
    // nominal end time rather than being shortened.
    for i in 0..=steps {
        let time_hours = i as f64 * config.time_step_minutes / 60.0;

        let outdoor_temp = outdoor_temperature(
            time_hours,
            config.outdoor_temp_day,
            config.outdoor_temp_night,
        );
        let delta_t = indoor_temp - outdoor_temp;

        // Conductive losses, Watts. The floor references the damped ground
        // temperature, not the instantaneous outdoor swing.
        let wall_loss = wall_ua * delta_t;
        let roof_loss = surfaces.roof_area * room.roof_u_value * delta_t;
        let floor_loss = surfaces.floor_area * room.floor_u_value * (indoor_temp - ground_temp);
        let opening_conduction = surfaces.weighted_opening_ua * delta_t;
        let conduction_loss = wall_loss + roof_loss + floor_loss + opening_conduction;

        let ventilation_loss = VENTILATION_COEFF * room.infiltration_rate * volume * delta_t;
        let total_heat_loss = conduction_loss + ventilation_loss;

        // Solar gain, Watts. Windows only; doors never transmit.
        let solar_gain: f64 = room
            .openings
            .iter()
            .filter(|opening| opening.kind == OpeningKind::Window)
            .map(|opening| {
                opening.area()
                    * opening.shgc.unwrap_or(DEFAULT_SHGC)
                    * solar::irradiance(time_hours % 24.0, opening.wall)
            })
            .sum();

        let heater_output = heater_output_watts(
            config,
            indoor_temp,
            total_heat_loss,
            solar_gain,
            thermal_capacitance,
            dt_seconds,
            max_heater_watts,
        );

        let net_power = heater_output + solar_gain - total_heat_loss;
        indoor_temp += net_power * dt_seconds / thermal_capacitance;

        total_energy_kwh += heater_output * dt_seconds / 3_600_000.0;

        // Rounding happens once, here; aggregates below read the rounded
        // series. The sample carries the post-update temperature.
        data.push(SimulationStep {
            time: round2(time_hours),
            indoor_temp: round2(indoor_temp),
            outdoor_temp: round2(outdoor_temp),
            heating_power: round2(heater_output / 1000.0),
            heat_loss_conduction: round2(conduction_loss / 1000.0),
            heat_loss_ventilation: round2(ventilation_loss / 1000.0),
            heat_gain_solar: round2(solar_gain / 1000.0),
            total_energy: round2(total_energy_kwh),
        });
    }

    let summary = summary::summarize(&data);
    SimulationResult::new(room, config, data, summary)
}

/// Synthetic diurnal outdoor temperature, °C, peaking at 14:00.
fn outdoor_temperature(time_hours: f64, day_temp: f64, night_temp: f64) -> f64 {
    let cycle_pos = (time_hours - OUTDOOR_PEAK_HOUR) / 24.0 * 2.0 * PI;
    let amplitude = (day_temp - night_temp) / 2.0;
    let average = (day_temp + night_temp) / 2.0;
    average + amplitude * cycle_pos.cos()
}

/// Heater output for one step, Watts.
///
/// Thermostat mode is a one-step lookahead: enough power to close the
/// setpoint deficit within this step plus enough to hold steady against the
/// current net loss, clamped to the heater's rating. No damping term; with a
/// large capacitance or step it can overshoot the setpoint.
fn heater_output_watts(
    config: &SimulationConfig,
    indoor_temp: f64,
    total_heat_loss: f64,
    solar_gain: f64,
    thermal_capacitance: f64,
    dt_seconds: f64,
    max_heater_watts: f64,
) -> f64 {
    match config.heating_mode {
        HeatingMode::Thermostat => {
            if indoor_temp < config.target_temp {
                let deficit_rate =
                    (config.target_temp - indoor_temp) * thermal_capacitance / dt_seconds;
                let hold_rate = total_heat_loss - solar_gain;
                (deficit_rate + hold_rate).max(0.0).min(max_heater_watts)
            } else {
                0.0
            }
        }
        // FixedPower runs flat out regardless of indoor temperature.
        // Schedule is reserved and currently drives the heater the same way.
        HeatingMode::FixedPower | HeatingMode::Schedule => max_heater_watts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn windowless_room() -> RoomConfig {
        RoomConfig {
            openings: vec![],
            wall_specific_u_values: None,
            ..Default::default()
        }
    }

    #[test]
    fn test_outdoor_cycle_peaks_at_fourteen() {
        let at_peak = outdoor_temperature(14.0, 12.0, 2.0);
        let at_trough = outdoor_temperature(2.0, 12.0, 2.0);

        assert!((at_peak - 12.0).abs() < 1e-9);
        assert!((at_trough - 2.0).abs() < 1e-9);
        assert!(outdoor_temperature(8.0, 12.0, 2.0) < at_peak);
    }

    #[test]
    fn test_fixed_power_saturates_every_step() {
        let config = SimulationConfig {
            heating_mode: HeatingMode::FixedPower,
            heater_power: 2.0,
            duration_hours: 6.0,
            ..Default::default()
        };

        let result = run(&windowless_room(), &config);
        assert!(result
            .data
            .iter()
            .all(|step| step.heating_power == 2.0));
    }

    #[test]
    fn test_schedule_mode_currently_runs_flat_out() {
        let base = SimulationConfig {
            heating_mode: HeatingMode::FixedPower,
            heater_power: 1.5,
            duration_hours: 3.0,
            ..Default::default()
        };
        let reserved = SimulationConfig {
            heating_mode: HeatingMode::Schedule,
            ..base.clone()
        };

        let room = windowless_room();
        assert_eq!(run(&room, &base).data, run(&room, &reserved).data);
    }

    #[test]
    fn test_thermostat_reaches_and_holds_setpoint() {
        // 1-minute steps keep the off-step sag small enough to observe a
        // steady hold; 50 kW closes the 3 °C deficit in a single step.
        let config = SimulationConfig {
            heating_mode: HeatingMode::Thermostat,
            heater_power: 50.0,
            initial_temp: 18.0,
            target_temp: 21.0,
            time_step_minutes: 1.0,
            duration_hours: 24.0,
            ..Default::default()
        };

        let result = run(&windowless_room(), &config);

        for step in &result.data[2..] {
            assert!(
                step.indoor_temp >= 20.8 && step.indoor_temp <= 21.01,
                "temperature {} at t={} left the setpoint band",
                step.indoor_temp,
                step.time
            );
        }
    }

    #[test]
    fn test_thermostat_stays_off_above_setpoint() {
        let config = SimulationConfig {
            heating_mode: HeatingMode::Thermostat,
            initial_temp: 30.0,
            target_temp: 21.0,
            duration_hours: 0.5,
            ..Default::default()
        };

        let result = run(&windowless_room(), &config);

        assert!(result.data.iter().all(|step| step.heating_power == 0.0));
        // With no heat input the room can only cool.
        let first = result.data.first().unwrap().indoor_temp;
        let last = result.data.last().unwrap().indoor_temp;
        assert!(last < first);
    }

    #[test]
    fn test_windowless_room_sees_no_solar_gain() {
        let config = SimulationConfig::default();
        let result = run(&windowless_room(), &config);

        assert!(result.data.iter().all(|step| step.heat_gain_solar == 0.0));
    }

    #[test]
    fn test_doors_do_not_admit_sun() {
        // Default room keeps its north door but loses the window.
        let mut room = RoomConfig::default();
        room.openings.retain(|o| o.kind == OpeningKind::Door);

        let result = run(&room, &SimulationConfig::default());
        assert!(result.data.iter().all(|step| step.heat_gain_solar == 0.0));
    }

    #[test]
    fn test_south_window_gains_sun_at_midday() {
        let result = run(&RoomConfig::default(), &SimulationConfig::default());

        let noon = result
            .data
            .iter()
            .find(|step| step.time == 12.0)
            .expect("noon sample");
        let midnight = &result.data[0];

        assert!(noon.heat_gain_solar > 0.0);
        assert_eq!(midnight.heat_gain_solar, 0.0);
    }

    #[test]
    fn test_result_snapshots_inputs() {
        let room = RoomConfig::default();
        let config = SimulationConfig::default();

        let result = run(&room, &config);

        assert_eq!(result.room, room);
        assert_eq!(result.config, config);
    }

    #[test]
    fn test_partial_step_grid_overruns_nominal_duration() {
        let config = SimulationConfig {
            duration_hours: 1.0,
            time_step_minutes: 25.0,
            ..Default::default()
        };

        let result = run(&windowless_room(), &config);

        // ceil(60/25) = 3 steps, 4 samples; the last lands at 75 min.
        assert_eq!(result.data.len(), 4);
        assert_eq!(result.data.last().unwrap().time, 1.25);
    }
}
