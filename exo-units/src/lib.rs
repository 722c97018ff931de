//! Exo Units - Astrophysical unit parsing and conversion
//!
//! Converts values between the units of four quantity kinds and picks
//! readable units for display.
//!
//! Kinds:
//! - Length (m, km, AU, ly, pc)
//! - Time (seconds, minutes, hours, days, years)
//! - Mass (kg, Mearth, Mjup, Msun)
//! - Temperature (K, C, F)

mod kind;
mod unit;
pub mod units;
mod parse;
mod convert;
mod select;
mod display;
pub mod tools;

pub use kind::QuantityKind;
pub use unit::{
    Unit, UnitKind, UnitError, unit_count,
    LengthUnit, TimeUnit, MassUnit, TemperatureUnit,
};
pub use units::{ConversionTable, TabulatedUnit};
pub use parse::{parse_unit, parse_any_unit, parse_names};
pub use convert::{
    convert, convert_indexed, convert_tabulated,
    convert_length, convert_time, convert_mass, convert_temperature,
    to_base, from_base, base_unit,
};
pub use select::{select_time_unit, select_length_unit, AU_SELECTION_FRACTION};
pub use display::{
    unit_display_string, list_supported_units, list_supported_units_capped,
    join_capped, MAX_LISTING_LEN, LISTING_SEPARATOR,
};

use exo_plugin::ToolRegistry;

/// Load unit tools into registry
pub fn load_units_library(registry: ToolRegistry) -> ToolRegistry {
    registry
        // Conversion
        .with_tool(tools::Convert)
        .with_tool(tools::SelectUnit)

        // Lookup
        .with_tool(tools::ParseUnit)
        .with_tool(tools::ListUnits)
        .with_tool(tools::UnitName)
}
