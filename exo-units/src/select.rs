//! Automatic unit selection for readable output
//!
//! Both selectors walk an ascending ladder of thresholds and pick the
//! coarsest unit the value has reached. They never fail.

use crate::{LengthUnit, TimeUnit, UnitKind};
use crate::units::{LENGTH_TABLE, TIME_TABLE};

/// Fraction of an AU below which distances stay in kilometers
pub const AU_SELECTION_FRACTION: f64 = 0.05;

/// Pick a time unit for a duration given in seconds
pub fn select_time_unit(seconds: f64) -> TimeUnit {
    let to_seconds = |unit: TimeUnit| TIME_TABLE.factor(unit.index(), TimeUnit::Seconds.index());

    if seconds < to_seconds(TimeUnit::Minutes) {
        return TimeUnit::Seconds;
    }
    if seconds < to_seconds(TimeUnit::Hours) {
        return TimeUnit::Minutes;
    }
    if seconds < to_seconds(TimeUnit::Days) {
        return TimeUnit::Hours;
    }
    if seconds < to_seconds(TimeUnit::Years) {
        return TimeUnit::Days;
    }
    TimeUnit::Years
}

/// Pick a length unit for a distance given in meters
pub fn select_length_unit(meters: f64) -> LengthUnit {
    let to_meters = |unit: LengthUnit| LENGTH_TABLE.factor(unit.index(), LengthUnit::Meters.index());

    if meters < to_meters(LengthUnit::Kilometers) {
        return LengthUnit::Meters;
    }
    if meters < to_meters(LengthUnit::AstronomicalUnits) * AU_SELECTION_FRACTION {
        return LengthUnit::Kilometers;
    }
    LengthUnit::AstronomicalUnits
}
