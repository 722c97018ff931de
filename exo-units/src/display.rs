//! Display strings and unit listings

use crate::{QuantityKind, UnitKind, LengthUnit, TimeUnit, MassUnit, TemperatureUnit};

/// Upper bound on the length of a unit listing
pub const MAX_LISTING_LEN: usize = 80;

/// Separator between names in a listing
pub const LISTING_SEPARATOR: &str = ", ";

fn display_names(kind: QuantityKind) -> &'static [&'static str] {
    match kind {
        QuantityKind::Length => LengthUnit::NAMES[0],
        QuantityKind::Time => TimeUnit::NAMES[0],
        QuantityKind::Mass => MassUnit::NAMES[0],
        QuantityKind::Temperature => TemperatureUnit::NAMES[0],
    }
}

/// Canonical name for a raw unit index.
///
/// Out-of-range indices are clamped: below zero gives the first unit,
/// past the end gives the last. Display paths never fail.
pub fn unit_display_string(kind: QuantityKind, index: i64) -> &'static str {
    let names = display_names(kind);
    let last = names.len() - 1;
    let index = usize::try_from(index.max(0)).map_or(last, |i| i.min(last));
    names[index]
}

/// Join `names` with `", "`, stopping before the result would exceed `max_len`.
///
/// Truncation drops whole names; no trailing separator or ellipsis is added.
pub fn join_capped(names: &[&str], max_len: usize) -> String {
    let mut out = String::with_capacity(max_len);

    for (i, name) in names.iter().enumerate() {
        let needed = if i == 0 { name.len() } else { LISTING_SEPARATOR.len() + name.len() };
        if out.len() + needed > max_len {
            break;
        }
        if i > 0 {
            out.push_str(LISTING_SEPARATOR);
        }
        out.push_str(name);
    }

    out
}

/// Comma-separated display names of every unit of `kind`, capped at
/// [`MAX_LISTING_LEN`] characters
pub fn list_supported_units(kind: QuantityKind) -> String {
    join_capped(display_names(kind), MAX_LISTING_LEN)
}

/// Like [`list_supported_units`] with a caller-chosen cap
pub fn list_supported_units_capped(kind: QuantityKind, max_len: usize) -> String {
    join_capped(display_names(kind), max_len)
}
