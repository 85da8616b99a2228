//! Approximate solar irradiance on the room's vertical walls.
//!
//! Models an equinox-like sun path: up between 06:00 and 18:00, peaking due
//! south at noon. Not a real-weather model; intended for comparative runs,
//! not absolute yield prediction.

use std::f64::consts::PI;

use crate::domain::Orientation;

const SUNRISE_HOUR: f64 = 6.0;
const SUNSET_HOUR: f64 = 18.0;
/// Peak direct normal irradiance at the reference latitude/date, W/m².
const PEAK_DIRECT_W_M2: f64 = 800.0;
/// Diffuse floor every lit surface receives, W/m².
const DIFFUSE_W_M2: f64 = 50.0;

/// Irradiance incident on one orientation's vertical surface, W/m².
///
/// `hour_of_day` is in [0, 24). Stateless; the integrator re-evaluates it
/// every step for every window-bearing wall.
pub fn irradiance(hour_of_day: f64, orientation: Orientation) -> f64 {
    if hour_of_day < SUNRISE_HOUR || hour_of_day > SUNSET_HOUR {
        return 0.0;
    }

    // Hour angle, radians: 0 at solar noon.
    let hour_angle = (hour_of_day - 12.0) * (PI / 12.0);

    // Surface-normal azimuth relative to South. North never faces the sun
    // on this path and receives diffuse light only.
    let surface_normal = match orientation {
        Orientation::South => 0.0,
        Orientation::East => -PI / 2.0,
        Orientation::West => PI / 2.0,
        Orientation::North => return DIFFUSE_W_M2,
    };

    let incidence = (hour_angle - surface_normal).cos();
    if incidence <= 0.0 {
        // Self-shaded.
        DIFFUSE_W_M2
    } else {
        DIFFUSE_W_M2 + PEAK_DIRECT_W_M2 * incidence
    }
}
