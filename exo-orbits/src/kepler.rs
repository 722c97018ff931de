//! Kepler's third law
//!
//! All inputs and outputs are SI: meters, seconds, kilograms. Inputs are
//! clamped to their absolute values; nothing here validates physics.

use std::f64::consts::PI;
use exo_core::constants::G;

const FOUR_PI_SQUARED: f64 = 4.0 * PI * PI;

/// Orbital period in seconds for semimajor axis `sma` around `host_mass`,
/// with `sat_mass` orbiting it
pub fn period(sma: f64, host_mass: f64, sat_mass: f64) -> f64 {
    let a = sma.abs();
    (FOUR_PI_SQUARED * a.powi(3) / (G * (host_mass + sat_mass).abs())).sqrt()
}

/// Semimajor axis in meters for an orbit of `period` seconds
pub fn semimajor_axis(period: f64, host_mass: f64, sat_mass: f64) -> f64 {
    (G * (host_mass + sat_mass).abs() * period * period / FOUR_PI_SQUARED).cbrt()
}

/// Combined mass of the system in kilograms from its semimajor axis and period
pub fn combined_mass(sma: f64, period: f64) -> f64 {
    FOUR_PI_SQUARED * sma.abs().powi(3) / (G * period * period)
}

/// Closest approach, `sma * (1 - e)`. Works in any length unit.
pub fn perihelion(sma: f64, eccentricity: f64) -> f64 {
    sma * (1.0 - eccentricity)
}

/// Farthest distance, `sma * (1 + e)`. Works in any length unit.
pub fn aphelion(sma: f64, eccentricity: f64) -> f64 {
    sma * (1.0 + eccentricity)
}
