//! Unit enumerations, one per quantity kind
//!
//! Every enumeration is contiguous from 0, and its order matches both the
//! name arrays and the conversion table rows in [`crate::units`], so that
//! `NAMES[array][u.index()]` and `table[u.index()]` describe the same unit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use exo_core::{ExoError, codes};
use crate::QuantityKind;
use crate::units::{
    LENGTH_ABBREVIATIONS, LENGTH_FULL_NAMES,
    TIME_PLURALS, TIME_ABBREVIATIONS, TIME_SINGULARS,
    MASS_SYMBOLS, MASS_PLURALS, MASS_SINGULARS,
    TEMPERATURE_SYMBOLS, TEMPERATURE_FULL_NAMES,
};

/// Behavior shared by the per-kind unit enumerations
pub trait UnitKind: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Quantity this unit measures
    const KIND: QuantityKind;

    /// Every unit of the kind, in index order
    const ALL: &'static [Self];

    /// Parallel name arrays, indexed `NAMES[array][unit.index()]`.
    /// The first array holds the canonical display names.
    const NAMES: &'static [&'static [&'static str]];

    /// Position of the unit in `ALL`, the name arrays and the table
    fn index(self) -> usize;

    /// Number of recognized units
    fn count() -> usize {
        Self::ALL.len()
    }

    /// Unit at `index`, or `None` outside `0..count()`
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical display string
    fn display_name(self) -> &'static str {
        Self::NAMES[0][self.index()]
    }

    /// Every accepted spelling, primary name first
    fn name_variants(self) -> Vec<&'static str> {
        Self::NAMES.iter().map(|names| names[self.index()]).collect()
    }

    /// Look up a unit by any accepted spelling
    fn parse(text: &str) -> Option<Self> {
        crate::parse::parse_names::<Self>(text)
    }
}

/// Length units (base: meters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Meters = 0,
    Kilometers = 1,
    AstronomicalUnits = 2,
    LightYears = 3,
    Parsecs = 4,
}

/// Time units (base: seconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    Seconds = 0,
    Minutes = 1,
    Hours = 2,
    Days = 3,
    /// Julian year of 365.25 days
    Years = 4,
}

/// Mass units (base: kilograms)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MassUnit {
    Kilograms = 0,
    EarthMasses = 1,
    JupiterMasses = 2,
    SolarMasses = 3,
}

/// Temperature units (base: Kelvin)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin = 0,
    Celsius = 1,
    Fahrenheit = 2,
}

impl UnitKind for LengthUnit {
    const KIND: QuantityKind = QuantityKind::Length;
    const ALL: &'static [Self] = &[
        LengthUnit::Meters,
        LengthUnit::Kilometers,
        LengthUnit::AstronomicalUnits,
        LengthUnit::LightYears,
        LengthUnit::Parsecs,
    ];
    const NAMES: &'static [&'static [&'static str]] = &[&LENGTH_ABBREVIATIONS, &LENGTH_FULL_NAMES];

    fn index(self) -> usize {
        self as usize
    }
}

impl UnitKind for TimeUnit {
    const KIND: QuantityKind = QuantityKind::Time;
    const ALL: &'static [Self] = &[
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Years,
    ];
    const NAMES: &'static [&'static [&'static str]] = &[&TIME_PLURALS, &TIME_ABBREVIATIONS, &TIME_SINGULARS];

    fn index(self) -> usize {
        self as usize
    }
}

impl UnitKind for MassUnit {
    const KIND: QuantityKind = QuantityKind::Mass;
    const ALL: &'static [Self] = &[
        MassUnit::Kilograms,
        MassUnit::EarthMasses,
        MassUnit::JupiterMasses,
        MassUnit::SolarMasses,
    ];
    const NAMES: &'static [&'static [&'static str]] = &[&MASS_SYMBOLS, &MASS_PLURALS, &MASS_SINGULARS];

    fn index(self) -> usize {
        self as usize
    }
}

impl UnitKind for TemperatureUnit {
    const KIND: QuantityKind = QuantityKind::Temperature;
    const ALL: &'static [Self] = &[
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
    ];
    const NAMES: &'static [&'static [&'static str]] = &[&TEMPERATURE_SYMBOLS, &TEMPERATURE_FULL_NAMES];

    fn index(self) -> usize {
        self as usize
    }
}

macro_rules! impl_display_and_from_str {
    ($($unit:ty => $variant:ident),*) => {
        $(
            impl fmt::Display for $unit {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.display_name())
                }
            }

            impl FromStr for $unit {
                type Err = UnitError;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$unit as UnitKind>::parse(s).ok_or_else(|| UnitError::NoUnitMatch {
                        kind: <$unit as UnitKind>::KIND,
                        text: s.to_string(),
                    })
                }
            }

            impl From<$unit> for Unit {
                fn from(unit: $unit) -> Self {
                    Unit::$variant(unit)
                }
            }
        )*
    };
}

impl_display_and_from_str!(
    LengthUnit => Length,
    TimeUnit => Time,
    MassUnit => Mass,
    TemperatureUnit => Temperature
);

/// A unit of any kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "unit", rename_all = "lowercase")]
pub enum Unit {
    Length(LengthUnit),
    Time(TimeUnit),
    Mass(MassUnit),
    Temperature(TemperatureUnit),
}

impl Unit {
    /// Quantity this unit measures
    pub fn kind(&self) -> QuantityKind {
        match self {
            Unit::Length(_) => QuantityKind::Length,
            Unit::Time(_) => QuantityKind::Time,
            Unit::Mass(_) => QuantityKind::Mass,
            Unit::Temperature(_) => QuantityKind::Temperature,
        }
    }

    /// Index of the unit within its kind
    pub fn index(&self) -> usize {
        match self {
            Unit::Length(u) => u.index(),
            Unit::Time(u) => u.index(),
            Unit::Mass(u) => u.index(),
            Unit::Temperature(u) => u.index(),
        }
    }

    /// Canonical display string
    pub fn name(&self) -> &'static str {
        match self {
            Unit::Length(u) => u.display_name(),
            Unit::Time(u) => u.display_name(),
            Unit::Mass(u) => u.display_name(),
            Unit::Temperature(u) => u.display_name(),
        }
    }

    /// Every accepted spelling, primary name first
    pub fn name_variants(&self) -> Vec<&'static str> {
        match self {
            Unit::Length(u) => u.name_variants(),
            Unit::Time(u) => u.name_variants(),
            Unit::Mass(u) => u.name_variants(),
            Unit::Temperature(u) => u.name_variants(),
        }
    }

    /// Validate a raw index for `kind`.
    ///
    /// Only `0 <= index < unit_count(kind)` is accepted.
    pub fn from_index(kind: QuantityKind, index: i64) -> Result<Unit, UnitError> {
        let invalid = || UnitError::InvalidUnit { kind, index, count: unit_count(kind) };
        let index = usize::try_from(index).map_err(|_| invalid())?;

        let unit = match kind {
            QuantityKind::Length => LengthUnit::from_index(index).map(Unit::Length),
            QuantityKind::Time => TimeUnit::from_index(index).map(Unit::Time),
            QuantityKind::Mass => MassUnit::from_index(index).map(Unit::Mass),
            QuantityKind::Temperature => TemperatureUnit::from_index(index).map(Unit::Temperature),
        };
        unit.ok_or_else(invalid)
    }

    /// Every unit of `kind`, in index order
    pub fn all(kind: QuantityKind) -> Vec<Unit> {
        match kind {
            QuantityKind::Length => LengthUnit::ALL.iter().map(|&u| Unit::Length(u)).collect(),
            QuantityKind::Time => TimeUnit::ALL.iter().map(|&u| Unit::Time(u)).collect(),
            QuantityKind::Mass => MassUnit::ALL.iter().map(|&u| Unit::Mass(u)).collect(),
            QuantityKind::Temperature => TemperatureUnit::ALL.iter().map(|&u| Unit::Temperature(u)).collect(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of recognized units of `kind`
pub fn unit_count(kind: QuantityKind) -> usize {
    match kind {
        QuantityKind::Length => LengthUnit::count(),
        QuantityKind::Time => TimeUnit::count(),
        QuantityKind::Mass => MassUnit::count(),
        QuantityKind::Temperature => TemperatureUnit::count(),
    }
}

/// Errors that can occur during unit lookup and conversion
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    /// Raw index outside `0..count` for the kind
    #[error("invalid {kind} unit index {index} (expected 0..{count})")]
    InvalidUnit {
        kind: QuantityKind,
        index: i64,
        count: usize,
    },
    /// Unit passed where a unit of another kind was expected
    #[error("{unit} is a {} unit, expected a {expected} unit", .unit.kind())]
    WrongKind {
        expected: QuantityKind,
        unit: Unit,
    },
    /// No accepted name matched the text
    #[error("unknown {kind} unit: {text}")]
    NoUnitMatch {
        kind: QuantityKind,
        text: String,
    },
    /// Quantity kind name not recognized
    #[error("unknown quantity kind: {0}")]
    UnknownKind(String),
}

impl From<UnitError> for ExoError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::InvalidUnit { kind, index, count } => {
                ExoError::invalid_unit(kind.name(), format!("index {} out of range 0..{}", index, count))
            }
            UnitError::WrongKind { expected, unit } => {
                ExoError::invalid_unit(expected.name(), format!("'{}' is a {} unit", unit, unit.kind()))
            }
            UnitError::NoUnitMatch { kind, text } => {
                ExoError::no_unit_match(kind.name(), &text)
                    .with_suggestion(format!("Supported {} units: {}", kind, crate::list_supported_units(kind)))
            }
            UnitError::UnknownKind(name) => {
                ExoError::new(codes::DOMAIN_ERROR, format!("Unknown quantity kind: {}", name))
                    .with_suggestion("Use one of: length, time, mass, temperature")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_contiguous() {
        for (i, u) in LengthUnit::ALL.iter().enumerate() {
            assert_eq!(u.index(), i);
        }
        for (i, u) in TimeUnit::ALL.iter().enumerate() {
            assert_eq!(u.index(), i);
        }
        for (i, u) in MassUnit::ALL.iter().enumerate() {
            assert_eq!(u.index(), i);
        }
        for (i, u) in TemperatureUnit::ALL.iter().enumerate() {
            assert_eq!(u.index(), i);
        }
    }

    #[test]
    fn test_name_arrays_match_unit_count() {
        fn check<U: UnitKind>() {
            assert!(!U::NAMES.is_empty());
            for names in U::NAMES {
                assert_eq!(names.len(), U::count(), "{} name array length", U::KIND);
            }
        }
        check::<LengthUnit>();
        check::<TimeUnit>();
        check::<MassUnit>();
        check::<TemperatureUnit>();
    }

    #[test]
    fn test_display_names() {
        assert_eq!(LengthUnit::AstronomicalUnits.to_string(), "AU");
        assert_eq!(TimeUnit::Hours.to_string(), "hours");
        assert_eq!(MassUnit::SolarMasses.to_string(), "Msun");
        assert_eq!(TemperatureUnit::Celsius.to_string(), "C");
        assert_eq!(Unit::from(LengthUnit::Kilometers).to_string(), "km");
    }

    #[test]
    fn test_name_variants() {
        assert_eq!(TimeUnit::Days.name_variants(), vec!["days", "d", "day"]);
        assert_eq!(LengthUnit::Parsecs.name_variants(), vec!["pc", "parsecs"]);
    }

    #[test]
    fn test_from_index_strict_bounds() {
        let count = unit_count(QuantityKind::Time) as i64;
        assert_eq!(Unit::from_index(QuantityKind::Time, 0).unwrap(), Unit::Time(TimeUnit::Seconds));
        assert_eq!(Unit::from_index(QuantityKind::Time, count - 1).unwrap(), Unit::Time(TimeUnit::Years));

        // index == count is rejected
        let err = Unit::from_index(QuantityKind::Time, count).unwrap_err();
        assert_eq!(err, UnitError::InvalidUnit { kind: QuantityKind::Time, index: count, count: 5 });

        assert!(Unit::from_index(QuantityKind::Mass, -1).is_err());
    }

    #[test]
    fn test_from_str_no_match() {
        let err = "furlongs".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err, UnitError::NoUnitMatch { kind: QuantityKind::Length, text: "furlongs".to_string() });
        assert_eq!("Msun".parse::<MassUnit>().unwrap(), MassUnit::SolarMasses);
    }

    #[test]
    fn test_error_messages() {
        let err = UnitError::WrongKind { expected: QuantityKind::Length, unit: Unit::Time(TimeUnit::Days) };
        assert_eq!(err.to_string(), "days is a time unit, expected a length unit");
    }

    #[test]
    fn test_into_exo_error() {
        let err: ExoError = UnitError::NoUnitMatch { kind: QuantityKind::Mass, text: "stone".to_string() }.into();
        assert_eq!(err.code, codes::NO_UNIT_MATCH);
        assert!(err.suggestion.unwrap().contains("kg, Mearth, Mjup, Msun"));

        let err: ExoError = UnitError::InvalidUnit { kind: QuantityKind::Length, index: 5, count: 5 }.into();
        assert_eq!(err.code, codes::INVALID_UNIT);
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_value(Unit::Mass(MassUnit::JupiterMasses)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "mass", "unit": "JupiterMasses"}));
    }
}
