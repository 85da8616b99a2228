//! Reduces a step sequence into the run's summary statistics.

use super::round2;
use crate::domain::{RunSummary, SimulationStep};

/// Aggregates over the emitted (already-rounded) series.
///
/// The peak figure combines conduction and ventilation only; solar gain is
/// deliberately excluded so the number reflects worst-case load. The mean
/// temperature weights every sample equally regardless of grid spacing.
pub fn summarize(steps: &[SimulationStep]) -> RunSummary {
    let Some(last) = steps.last() else {
        return RunSummary {
            total_energy_kwh: 0.0,
            max_heat_loss_kw: 0.0,
            average_temp_c: 0.0,
        };
    };

    let max_heat_loss_kw = steps
        .iter()
        .map(|step| step.heat_loss_conduction + step.heat_loss_ventilation)
        .fold(f64::NEG_INFINITY, f64::max);

    let average_temp_c =
        steps.iter().map(|step| step.indoor_temp).sum::<f64>() / steps.len() as f64;

    RunSummary {
        total_energy_kwh: last.total_energy,
        max_heat_loss_kw: round2(max_heat_loss_kw),
        average_temp_c: round2(average_temp_c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(
        indoor_temp: f64,
        conduction: f64,
        ventilation: f64,
        solar: f64,
        total_energy: f64,
    ) -> SimulationStep {
        SimulationStep {
            time: 0.0,
            indoor_temp,
            outdoor_temp: 5.0,
            heating_power: 0.0,
            heat_loss_conduction: conduction,
            heat_loss_ventilation: ventilation,
            heat_gain_solar: solar,
            total_energy,
        }
    }

    #[test]
    fn test_empty_sequence_yields_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_energy_kwh, 0.0);
        assert_eq!(summary.max_heat_loss_kw, 0.0);
        assert_eq!(summary.average_temp_c, 0.0);
    }

    #[test]
    fn test_total_energy_is_final_cumulative_value() {
        let steps = vec![
            step(18.0, 1.0, 0.2, 0.0, 0.5),
            step(19.0, 1.0, 0.2, 0.0, 1.1),
            step(20.0, 1.0, 0.2, 0.0, 1.6),
        ];
        assert_eq!(summarize(&steps).total_energy_kwh, 1.6);
    }

    #[test]
    fn test_peak_loss_excludes_solar_gain() {
        let steps = vec![
            // Peak-sun step: highest gross loss, large gain.
            step(21.0, 2.0, 0.5, 3.0, 0.0),
            step(21.0, 1.5, 0.4, 0.0, 0.0),
        ];
        assert_eq!(summarize(&steps).max_heat_loss_kw, 2.5);
    }

    #[test]
    fn test_average_temp_is_unweighted_mean() {
        let steps = vec![
            step(18.0, 0.0, 0.0, 0.0, 0.0),
            step(20.0, 0.0, 0.0, 0.0, 0.0),
            step(22.0, 0.0, 0.0, 0.0, 0.0),
        ];
        assert_eq!(summarize(&steps).average_temp_c, 20.0);
    }
}
