//! Unit registries: name arrays and conversion tables
//!
//! Name arrays are parallel: entry `i` of every array names the unit with
//! index `i`. Conversion tables are built once from each unit's ratio to the
//! base unit of its kind, so every factor carries a single rounding step.

use std::sync::LazyLock;
use exo_core::constants::{
    METERS_PER_KILOMETER, METERS_PER_AU, METERS_PER_LIGHT_YEAR, METERS_PER_PARSEC,
    SECONDS_PER_MINUTE, SECONDS_PER_HOUR, SECONDS_PER_DAY, SECONDS_PER_YEAR,
    EARTH_MASS, JUPITER_MASS, SOLAR_MASS,
};
use crate::{LengthUnit, TimeUnit, MassUnit, UnitKind};

// ============================================================================
// Name arrays
// ============================================================================

pub const NUM_LENGTH_UNITS: usize = 5;
pub const NUM_TIME_UNITS: usize = 5;
pub const NUM_MASS_UNITS: usize = 4;
pub const NUM_TEMPERATURE_UNITS: usize = 3;

pub const LENGTH_ABBREVIATIONS: [&str; NUM_LENGTH_UNITS] = ["m", "km", "AU", "ly", "pc"];
pub const LENGTH_FULL_NAMES: [&str; NUM_LENGTH_UNITS] =
    ["meters", "kilometers", "astronomical-units", "light-years", "parsecs"];

pub const TIME_PLURALS: [&str; NUM_TIME_UNITS] = ["seconds", "minutes", "hours", "days", "years"];
pub const TIME_ABBREVIATIONS: [&str; NUM_TIME_UNITS] = ["s", "min", "h", "d", "yr"];
pub const TIME_SINGULARS: [&str; NUM_TIME_UNITS] = ["second", "minute", "hour", "day", "year"];

pub const MASS_SYMBOLS: [&str; NUM_MASS_UNITS] = ["kg", "Mearth", "Mjup", "Msun"];
pub const MASS_PLURALS: [&str; NUM_MASS_UNITS] =
    ["kilograms", "earth-masses", "jupiter-masses", "solar-masses"];
pub const MASS_SINGULARS: [&str; NUM_MASS_UNITS] =
    ["kilogram", "earth-mass", "jupiter-mass", "solar-mass"];

pub const TEMPERATURE_SYMBOLS: [&str; NUM_TEMPERATURE_UNITS] = ["K", "C", "F"];
pub const TEMPERATURE_FULL_NAMES: [&str; NUM_TEMPERATURE_UNITS] = ["kelvin", "celsius", "fahrenheit"];

// ============================================================================
// Base-unit ratios (index order)
// ============================================================================

/// Meters per unit
const LENGTH_RATIOS: [f64; NUM_LENGTH_UNITS] = [
    1.0,
    METERS_PER_KILOMETER,
    METERS_PER_AU,
    METERS_PER_LIGHT_YEAR,
    METERS_PER_PARSEC,
];

/// Seconds per unit
const TIME_RATIOS: [f64; NUM_TIME_UNITS] = [
    1.0,
    SECONDS_PER_MINUTE,
    SECONDS_PER_HOUR,
    SECONDS_PER_DAY,
    SECONDS_PER_YEAR,
];

/// Kilograms per unit
const MASS_RATIOS: [f64; NUM_MASS_UNITS] = [1.0, EARTH_MASS, JUPITER_MASS, SOLAR_MASS];

// ============================================================================
// Conversion tables
// ============================================================================

/// Square matrix of multiplicative factors, indexed `[source][dest]`
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable<const N: usize> {
    factors: [[f64; N]; N],
}

impl<const N: usize> ConversionTable<N> {
    /// Build the table from each unit's size in the base unit.
    ///
    /// The diagonal is exactly 1.
    pub fn from_ratios(ratios: &[f64; N]) -> Self {
        let mut factors = [[1.0; N]; N];
        for (from, row) in factors.iter_mut().enumerate() {
            for (to, factor) in row.iter_mut().enumerate() {
                if from != to {
                    *factor = ratios[from] / ratios[to];
                }
            }
        }
        ConversionTable { factors }
    }

    /// Factor converting a value in unit `from` to unit `to`
    pub fn factor(&self, from: usize, to: usize) -> f64 {
        self.factors[from][to]
    }

    /// Number of units covered
    pub fn size(&self) -> usize {
        N
    }
}

pub static LENGTH_TABLE: LazyLock<ConversionTable<NUM_LENGTH_UNITS>> =
    LazyLock::new(|| ConversionTable::from_ratios(&LENGTH_RATIOS));

pub static TIME_TABLE: LazyLock<ConversionTable<NUM_TIME_UNITS>> =
    LazyLock::new(|| ConversionTable::from_ratios(&TIME_RATIOS));

pub static MASS_TABLE: LazyLock<ConversionTable<NUM_MASS_UNITS>> =
    LazyLock::new(|| ConversionTable::from_ratios(&MASS_RATIOS));

/// Units whose conversions are a single multiplication
pub trait TabulatedUnit: UnitKind {
    /// Factor converting a value in `from` to `to`
    fn factor(from: Self, to: Self) -> f64;
}

impl TabulatedUnit for LengthUnit {
    fn factor(from: Self, to: Self) -> f64 {
        LENGTH_TABLE.factor(from.index(), to.index())
    }
}

impl TabulatedUnit for TimeUnit {
    fn factor(from: Self, to: Self) -> f64 {
        TIME_TABLE.factor(from.index(), to.index())
    }
}

impl TabulatedUnit for MassUnit {
    fn factor(from: Self, to: Self) -> f64 {
        MASS_TABLE.factor(from.index(), to.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn check_table<const N: usize>(table: &ConversionTable<N>) {
        for a in 0..N {
            assert_eq!(table.factor(a, a), 1.0, "diagonal entry {}", a);
            for b in 0..N {
                assert_relative_eq!(table.factor(a, b) * table.factor(b, a), 1.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_tables_are_reciprocal() {
        check_table(&LENGTH_TABLE);
        check_table(&TIME_TABLE);
        check_table(&MASS_TABLE);
    }

    #[test]
    fn test_table_sizes_match_enums() {
        assert_eq!(LENGTH_TABLE.size(), LengthUnit::count());
        assert_eq!(TIME_TABLE.size(), TimeUnit::count());
        assert_eq!(MASS_TABLE.size(), MassUnit::count());
    }

    #[test]
    fn test_known_factors() {
        assert_eq!(LengthUnit::factor(LengthUnit::Kilometers, LengthUnit::Meters), 1000.0);
        assert_eq!(LengthUnit::factor(LengthUnit::AstronomicalUnits, LengthUnit::Meters), 149_597_870_700.0);
        assert_eq!(TimeUnit::factor(TimeUnit::Hours, TimeUnit::Seconds), 3600.0);
        assert_eq!(TimeUnit::factor(TimeUnit::Years, TimeUnit::Days), 365.25);
        assert_relative_eq!(
            MassUnit::factor(MassUnit::SolarMasses, MassUnit::EarthMasses),
            332_946.0,
            max_relative = 1e-5
        );
        assert_relative_eq!(
            LengthUnit::factor(LengthUnit::Parsecs, LengthUnit::LightYears),
            3.261_563_777,
            max_relative = 1e-9
        );
    }
}
