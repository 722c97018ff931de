//! Physical constants in SI units
//!
//! Astronomical lengths follow the IAU 2012/2015 resolutions, masses the
//! IAU 2015 nominal values.

// ============================================================================
// Gravitation
// ============================================================================

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2 (CODATA 2018)
pub const G: f64 = 6.674_30e-11;

// ============================================================================
// Lengths (meters)
// ============================================================================

pub const METERS_PER_KILOMETER: f64 = 1.0e3;

/// Astronomical unit, exact by IAU 2012 Resolution B2
pub const METERS_PER_AU: f64 = 149_597_870_700.0;

/// Julian light year
pub const METERS_PER_LIGHT_YEAR: f64 = 9_460_730_472_580_800.0;

/// Parsec, 648000/pi AU
pub const METERS_PER_PARSEC: f64 = METERS_PER_AU * 648_000.0 / std::f64::consts::PI;

// ============================================================================
// Times (seconds)
// ============================================================================

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian year, 365.25 days
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

// ============================================================================
// Masses (kilograms)
// ============================================================================

/// Nominal Earth mass, GM_E / G
pub const EARTH_MASS: f64 = 5.972_17e24;

/// Nominal Jupiter mass, GM_J / G
pub const JUPITER_MASS: f64 = 1.898_13e27;

/// Nominal solar mass, GM_sun / G
pub const SOLAR_MASS: f64 = 1.988_41e30;

// ============================================================================
// Temperature
// ============================================================================

/// Celsius value of absolute zero
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

/// Fahrenheit degrees per Celsius degree
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Fahrenheit value of the freezing point of water
pub const FREEZING_POINT_F: f64 = 32.0;
