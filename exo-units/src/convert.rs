//! Unit conversion
//!
//! Length, time and mass convert through the precomputed tables in
//! [`crate::units`]. Temperature is affine and converts through closed-form
//! formulas with Kelvin as the base.

use tracing::{debug, trace};
use exo_core::constants::{ABSOLUTE_ZERO_C, FAHRENHEIT_PER_CELSIUS, FREEZING_POINT_F};
use crate::{QuantityKind, Unit, UnitError, TemperatureUnit, LengthUnit, TimeUnit, MassUnit, UnitKind};
use crate::units::TabulatedUnit;

/// Convert between two units of a tabulated kind
pub fn convert_tabulated<U: TabulatedUnit>(value: f64, from: U, to: U) -> f64 {
    value * U::factor(from, to)
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    convert_tabulated(value, from, to)
}

pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    convert_tabulated(value, from, to)
}

pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    convert_tabulated(value, from, to)
}

/// Convert between temperature scales
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Kelvin, Kelvin) | (Celsius, Celsius) | (Fahrenheit, Fahrenheit) => value,
        (Kelvin, Celsius) => value + ABSOLUTE_ZERO_C,
        (Kelvin, Fahrenheit) => (value + ABSOLUTE_ZERO_C) * FAHRENHEIT_PER_CELSIUS + FREEZING_POINT_F,
        (Celsius, Kelvin) => value - ABSOLUTE_ZERO_C,
        (Celsius, Fahrenheit) => value * FAHRENHEIT_PER_CELSIUS + FREEZING_POINT_F,
        (Fahrenheit, Kelvin) => (value - FREEZING_POINT_F) / FAHRENHEIT_PER_CELSIUS - ABSOLUTE_ZERO_C,
        (Fahrenheit, Celsius) => (value - FREEZING_POINT_F) / FAHRENHEIT_PER_CELSIUS,
    }
}

/// Convert `value` from one unit of `kind` to another.
///
/// Fails with [`UnitError::WrongKind`] when either unit belongs to another
/// kind. Negative results are valid values (e.g. -40 C), never errors.
pub fn convert(kind: QuantityKind, value: f64, from: Unit, to: Unit) -> Result<f64, UnitError> {
    let result = match (from, to) {
        (Unit::Length(a), Unit::Length(b)) if kind == QuantityKind::Length => convert_length(value, a, b),
        (Unit::Time(a), Unit::Time(b)) if kind == QuantityKind::Time => convert_time(value, a, b),
        (Unit::Mass(a), Unit::Mass(b)) if kind == QuantityKind::Mass => convert_mass(value, a, b),
        (Unit::Temperature(a), Unit::Temperature(b)) if kind == QuantityKind::Temperature => {
            convert_temperature(value, a, b)
        }
        _ => {
            let unit = if from.kind() != kind { from } else { to };
            debug!(%kind, %unit, "rejected conversion with unit of another kind");
            return Err(UnitError::WrongKind { expected: kind, unit });
        }
    };

    trace!(%kind, value, %from, %to, result, "converted");
    Ok(result)
}

/// Convert using raw unit indices.
///
/// Each index must satisfy `0 <= index < unit_count(kind)`; anything else
/// fails with [`UnitError::InvalidUnit`].
pub fn convert_indexed(kind: QuantityKind, value: f64, from: i64, to: i64) -> Result<f64, UnitError> {
    let from = Unit::from_index(kind, from)?;
    let to = Unit::from_index(kind, to)?;
    convert(kind, value, from, to)
}

/// Convert a value in `unit` to the base unit of its kind
pub fn to_base(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Length(u) => convert_length(value, u, LengthUnit::Meters),
        Unit::Time(u) => convert_time(value, u, TimeUnit::Seconds),
        Unit::Mass(u) => convert_mass(value, u, MassUnit::Kilograms),
        Unit::Temperature(u) => convert_temperature(value, u, TemperatureUnit::Kelvin),
    }
}

/// Convert a value in the base unit of `unit`'s kind into `unit`
pub fn from_base(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Length(u) => convert_length(value, LengthUnit::Meters, u),
        Unit::Time(u) => convert_time(value, TimeUnit::Seconds, u),
        Unit::Mass(u) => convert_mass(value, MassUnit::Kilograms, u),
        Unit::Temperature(u) => convert_temperature(value, TemperatureUnit::Kelvin, u),
    }
}

/// Base unit of `kind`
pub fn base_unit(kind: QuantityKind) -> Unit {
    match kind {
        QuantityKind::Length => Unit::Length(LengthUnit::ALL[0]),
        QuantityKind::Time => Unit::Time(TimeUnit::ALL[0]),
        QuantityKind::Mass => Unit::Mass(MassUnit::ALL[0]),
        QuantityKind::Temperature => Unit::Temperature(TemperatureUnit::ALL[0]),
    }
}
