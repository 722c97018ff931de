//! Unit string parsing
//!
//! Matching is exact and case-sensitive. Units are scanned in index order,
//! and for each unit every name array is tried before moving to the next
//! unit, so the lowest-index unit owning a spelling wins.

use tracing::debug;
use crate::{QuantityKind, Unit, UnitKind, LengthUnit, TimeUnit, MassUnit, TemperatureUnit};

/// Look up a typed unit by any of its accepted spellings
pub fn parse_names<U: UnitKind>(text: &str) -> Option<U> {
    let found = U::ALL
        .iter()
        .copied()
        .find(|unit| U::NAMES.iter().any(|names| names[unit.index()] == text));

    if found.is_none() {
        debug!(kind = %U::KIND, text, "no unit matched");
    }
    found
}

/// Parse a unit name for the given kind
///
/// Returns `None` when no accepted name matches; callers decide whether
/// that is an error.
pub fn parse_unit(kind: QuantityKind, text: &str) -> Option<Unit> {
    match kind {
        QuantityKind::Length => parse_names::<LengthUnit>(text).map(Unit::Length),
        QuantityKind::Time => parse_names::<TimeUnit>(text).map(Unit::Time),
        QuantityKind::Mass => parse_names::<MassUnit>(text).map(Unit::Mass),
        QuantityKind::Temperature => parse_names::<TemperatureUnit>(text).map(Unit::Temperature),
    }
}

/// Parse a unit name of any kind, trying kinds in declaration order
pub fn parse_any_unit(text: &str) -> Option<Unit> {
    QuantityKind::ALL.iter().find_map(|&kind| parse_unit(kind, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_variant() {
        assert_eq!(parse_unit(QuantityKind::Length, "km"), Some(Unit::Length(LengthUnit::Kilometers)));
        assert_eq!(parse_unit(QuantityKind::Length, "kilometers"), Some(Unit::Length(LengthUnit::Kilometers)));
        assert_eq!(parse_unit(QuantityKind::Time, "hours"), Some(Unit::Time(TimeUnit::Hours)));
        assert_eq!(parse_unit(QuantityKind::Time, "h"), Some(Unit::Time(TimeUnit::Hours)));
        assert_eq!(parse_unit(QuantityKind::Time, "hour"), Some(Unit::Time(TimeUnit::Hours)));
        assert_eq!(parse_unit(QuantityKind::Mass, "solar-mass"), Some(Unit::Mass(MassUnit::SolarMasses)));
        assert_eq!(parse_unit(QuantityKind::Temperature, "fahrenheit"), Some(Unit::Temperature(TemperatureUnit::Fahrenheit)));
    }

    #[test]
    fn test_display_name_round_trip() {
        for kind in QuantityKind::ALL {
            for unit in Unit::all(kind) {
                assert_eq!(parse_unit(kind, unit.name()), Some(unit), "round trip of {}", unit);
                for variant in unit.name_variants() {
                    assert_eq!(parse_unit(kind, variant), Some(unit), "variant {}", variant);
                }
            }
        }
    }

    #[test]
    fn test_unknown_unit() {
        for kind in QuantityKind::ALL {
            assert_eq!(parse_unit(kind, "not-a-real-unit"), None);
            assert_eq!(parse_unit(kind, ""), None);
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(parse_unit(QuantityKind::Length, "AU"), Some(Unit::Length(LengthUnit::AstronomicalUnits)));
        assert_eq!(parse_unit(QuantityKind::Length, "au"), None);
        assert_eq!(parse_unit(QuantityKind::Temperature, "k"), None);
    }

    #[test]
    fn test_kind_scoped() {
        // "m" is a length; no time unit is spelled that way
        assert_eq!(parse_unit(QuantityKind::Time, "m"), None);
        assert_eq!(parse_unit(QuantityKind::Length, "seconds"), None);
    }

    #[test]
    fn test_parse_any_unit() {
        assert_eq!(parse_any_unit("yr"), Some(Unit::Time(TimeUnit::Years)));
        assert_eq!(parse_any_unit("Mjup"), Some(Unit::Mass(MassUnit::JupiterMasses)));
        assert_eq!(parse_any_unit("celsius"), Some(Unit::Temperature(TemperatureUnit::Celsius)));
        assert_eq!(parse_any_unit("furlong"), None);
    }

    #[test]
    fn test_typed_parse() {
        assert_eq!(LengthUnit::parse("parsecs"), Some(LengthUnit::Parsecs));
        assert_eq!(TimeUnit::parse("d"), Some(TimeUnit::Days));
        assert_eq!(MassUnit::parse("Mearth"), Some(MassUnit::EarthMasses));
        assert_eq!(TemperatureUnit::parse("Kelvin"), None);
    }
}
