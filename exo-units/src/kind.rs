//! Quantity kinds
//!
//! The toolkit recognizes exactly four physical quantities. Each has its own
//! unit enumeration and canonical base unit:
//! length (meters), time (seconds), mass (kilograms), temperature (Kelvin).

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::UnitError;

/// The physical quantity a unit measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    /// Distances and semimajor axes
    Length,
    /// Durations and orbital periods
    Time,
    Mass,
    Temperature,
}

impl QuantityKind {
    /// All kinds, in declaration order
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Length,
        QuantityKind::Time,
        QuantityKind::Mass,
        QuantityKind::Temperature,
    ];

    /// Lowercase name used in messages and tool arguments
    pub fn name(&self) -> &'static str {
        match self {
            QuantityKind::Length => "length",
            QuantityKind::Time => "time",
            QuantityKind::Mass => "mass",
            QuantityKind::Temperature => "temperature",
        }
    }

    /// Name of the canonical base unit for this kind
    pub fn base_unit_name(&self) -> &'static str {
        match self {
            QuantityKind::Length => "meters",
            QuantityKind::Time => "seconds",
            QuantityKind::Mass => "kilograms",
            QuantityKind::Temperature => "kelvin",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantityKind {
    type Err = UnitError;

    /// Accepts the kind name plus the orbital aliases `sma` and `period`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "distance" | "sma" => Ok(QuantityKind::Length),
            "time" | "period" => Ok(QuantityKind::Time),
            "mass" => Ok(QuantityKind::Mass),
            "temperature" | "temp" => Ok(QuantityKind::Temperature),
            _ => Err(UnitError::UnknownKind(s.to_string())),
        }
    }
}
