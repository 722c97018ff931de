//! Unit tools exposed through the tool registry

use exo_plugin::prelude::*;
use crate::{
    QuantityKind, Unit, UnitError, UnitKind,
    convert, parse_unit, parse_any_unit, from_base,
    select_time_unit, select_length_unit, unit_display_string, list_supported_units_capped,
};

fn extract_kind(args: &JsonValue, tool: &str) -> Result<QuantityKind, ExoError> {
    let text = extract_text(args, tool, "kind")?;
    text.parse::<QuantityKind>().map_err(ExoError::from)
}

fn extract_index(args: &JsonValue, tool: &str, arg: &str) -> Result<i64, ExoError> {
    let n = extract_number(args, tool, arg)?;
    if n.fract() != 0.0 || !n.is_finite() {
        return Err(ExoError::arg_type(tool, arg, "Integer", "Number"));
    }
    // Saturating cast; display clamps out-of-range values anyway
    Ok(n as i64)
}

fn require_unit(kind: QuantityKind, text: &str) -> Result<Unit, ExoError> {
    parse_unit(kind, text)
        .ok_or_else(|| UnitError::NoUnitMatch { kind, text: text.to_string() }.into())
}

// ============ convert ============

pub struct Convert;

static CONVERT_ARGS: [ArgMeta; 4] = [
    ArgMeta::required("value", "Number", "Value to convert"),
    ArgMeta::required("from_unit", "Text", "Source unit (e.g., \"AU\")"),
    ArgMeta::required("to_unit", "Text", "Target unit (e.g., \"km\")"),
    ArgMeta::optional("kind", "Text", "Quantity kind; inferred from from_unit when omitted", "inferred"),
];

static CONVERT_EXAMPLES: [&str; 3] = [
    "convert(1, \"AU\", \"km\") → 149597870.7",
    "convert(32, \"F\", \"C\") → 0",
    "convert(1, \"Msun\", \"Mjup\") → 1047.56",
];

static CONVERT_RELATED: [&str; 2] = ["parse_unit", "list_units"];

impl ToolPlugin for Convert {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "convert",
            description: "Convert a value from one unit to another of the same kind",
            usage: "convert(value, from_unit, to_unit, kind?)",
            args: &CONVERT_ARGS,
            returns: "{value: Number, unit: Text}",
            examples: &CONVERT_EXAMPLES,
            category: "units",
            related: &CONVERT_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let value = extract_number(args, "convert", "value")?;
        let from_text = extract_text(args, "convert", "from_unit")?;
        let to_text = extract_text(args, "convert", "to_unit")?;

        let kind = match extract_optional_text(args, "convert", "kind")? {
            Some(k) => k.parse::<QuantityKind>()?,
            None => parse_any_unit(from_text)
                .map(|u| u.kind())
                .ok_or_else(|| ExoError::no_unit_match("any", from_text))?,
        };

        let from = require_unit(kind, from_text)?;
        let to = require_unit(kind, to_text)?;
        let result = convert(kind, value, from, to)?;

        Ok(json!({ "value": result, "unit": to.name(), "kind": kind }))
    }
}

// ============ parse_unit ============

pub struct ParseUnit;

static PARSE_UNIT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("kind", "Text", "Quantity kind: length, time, mass or temperature"),
    ArgMeta::required("text", "Text", "Unit spelling to look up"),
];

static PARSE_UNIT_EXAMPLES: [&str; 2] = [
    "parse_unit(\"time\", \"yr\") → years",
    "parse_unit(\"length\", \"parsecs\") → pc",
];

static PARSE_UNIT_RELATED: [&str; 2] = ["list_units", "unit_name"];

impl ToolPlugin for ParseUnit {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "parse_unit",
            description: "Resolve a unit spelling to its canonical unit",
            usage: "parse_unit(kind, text)",
            args: &PARSE_UNIT_ARGS,
            returns: "{unit: Text, index: Integer, names: List<Text>}",
            examples: &PARSE_UNIT_EXAMPLES,
            category: "units",
            related: &PARSE_UNIT_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let kind = extract_kind(args, "parse_unit")?;
        let text = extract_text(args, "parse_unit", "text")?;
        let unit = require_unit(kind, text)?;

        Ok(json!({
            "kind": kind,
            "unit": unit.name(),
            "index": unit.index(),
            "names": unit.name_variants(),
        }))
    }
}

// ============ list_units ============

pub struct ListUnits;

static LIST_UNITS_ARGS: [ArgMeta; 1] = [
    ArgMeta::required("kind", "Text", "Quantity kind: length, time, mass or temperature"),
];

static LIST_UNITS_EXAMPLES: [&str; 1] = [
    "list_units(\"length\") → \"m, km, AU, ly, pc\"",
];

static LIST_UNITS_RELATED: [&str; 1] = ["parse_unit"];

impl ToolPlugin for ListUnits {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "list_units",
            description: "Comma-separated list of the units supported for a kind",
            usage: "list_units(kind)",
            args: &LIST_UNITS_ARGS,
            returns: "{units: Text}",
            examples: &LIST_UNITS_EXAMPLES,
            category: "units",
            related: &LIST_UNITS_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let kind = extract_kind(args, "list_units")?;
        let units = list_supported_units_capped(kind, ctx.list_width);

        Ok(json!({ "kind": kind, "units": units, "base": kind.base_unit_name() }))
    }
}

// ============ select_unit ============

pub struct SelectUnit;

static SELECT_UNIT_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("kind", "Text", "length or time"),
    ArgMeta::required("value", "Number", "Value in the base unit (meters or seconds)"),
];

static SELECT_UNIT_EXAMPLES: [&str; 2] = [
    "select_unit(\"time\", 18000) → {unit: \"hours\", value: 5}",
    "select_unit(\"length\", 1.5e11) → {unit: \"AU\", value: 1.0027}",
];

static SELECT_UNIT_RELATED: [&str; 1] = ["convert"];

impl ToolPlugin for SelectUnit {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "select_unit",
            description: "Pick the most readable unit for a base-unit value and express the value in it",
            usage: "select_unit(kind, value)",
            args: &SELECT_UNIT_ARGS,
            returns: "{unit: Text, value: Number}",
            examples: &SELECT_UNIT_EXAMPLES,
            category: "units",
            related: &SELECT_UNIT_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let kind = extract_kind(args, "select_unit")?;
        let value = extract_number(args, "select_unit", "value")?;

        let unit = match kind {
            QuantityKind::Length => Unit::Length(select_length_unit(value)),
            QuantityKind::Time => Unit::Time(select_time_unit(value)),
            other => {
                return Err(ExoError::domain_error(format!(
                    "select_unit(): no unit selection for {} values", other
                )).with_suggestion("Use kind \"length\" or \"time\""));
            }
        };

        Ok(json!({ "kind": kind, "unit": unit.name(), "value": from_base(value, unit) }))
    }
}

// ============ unit_name ============

pub struct UnitName;

static UNIT_NAME_ARGS: [ArgMeta; 2] = [
    ArgMeta::required("kind", "Text", "Quantity kind"),
    ArgMeta::required("index", "Integer", "Unit index; out-of-range values are clamped"),
];

static UNIT_NAME_EXAMPLES: [&str; 2] = [
    "unit_name(\"time\", 2) → \"hours\"",
    "unit_name(\"time\", 99) → \"years\"",
];

static UNIT_NAME_RELATED: [&str; 1] = ["parse_unit"];

impl ToolPlugin for UnitName {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "unit_name",
            description: "Canonical display name of a unit index",
            usage: "unit_name(kind, index)",
            args: &UNIT_NAME_ARGS,
            returns: "{unit: Text}",
            examples: &UNIT_NAME_EXAMPLES,
            category: "units",
            related: &UNIT_NAME_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let kind = extract_kind(args, "unit_name")?;
        let index = extract_index(args, "unit_name", "index")?;

        Ok(json!({ "kind": kind, "unit": unit_display_string(kind, index) }))
    }
}

/// Parse an optional unit argument, falling back to the base unit of `kind`
pub fn optional_unit<U: UnitKind>(args: &JsonValue, tool: &str, arg: &str) -> Result<U, ExoError> {
    match extract_optional_text(args, tool, arg)? {
        Some(text) => U::parse(text).ok_or_else(|| {
            ExoError::from(UnitError::NoUnitMatch { kind: U::KIND, text: text.to_string() })
                .at(format!("{}.{}", tool, arg))
        }),
        None => Ok(U::ALL[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LengthUnit, TimeUnit};
    use approx::assert_relative_eq;
    use exo_core::codes;

    fn ctx() -> ToolContext {
        ToolContext::default()
    }

    #[test]
    fn test_convert_tool_infers_kind() {
        let out = Convert.call(&json!({"value": 1, "from_unit": "AU", "to_unit": "km"}), &ctx()).unwrap();
        assert_relative_eq!(out["value"].as_f64().unwrap(), 149_597_870.7, max_relative = 1e-12);
        assert_eq!(out["unit"], "km");
        assert_eq!(out["kind"], "length");
    }

    #[test]
    fn test_convert_tool_temperature() {
        let out = Convert.call(&json!({"value": 32, "from_unit": "F", "to_unit": "celsius"}), &ctx()).unwrap();
        assert_eq!(out["value"].as_f64().unwrap(), 0.0);
        assert_eq!(out["unit"], "C");
    }

    #[test]
    fn test_convert_tool_errors() {
        let err = Convert.call(&json!({"value": 1, "from_unit": "AU", "to_unit": "years"}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::NO_UNIT_MATCH);

        let err = Convert.call(&json!({"value": 1, "from_unit": "furlong", "to_unit": "m"}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::NO_UNIT_MATCH);

        let err = Convert.call(&json!({"value": "x", "from_unit": "m", "to_unit": "km"}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::ARG_TYPE);
    }

    #[test]
    fn test_parse_unit_tool() {
        let out = ParseUnit.call(&json!({"kind": "period", "text": "yr"}), &ctx()).unwrap();
        assert_eq!(out["unit"], "years");
        assert_eq!(out["index"], 4);
        assert_eq!(out["names"], json!(["years", "yr", "year"]));
    }

    #[test]
    fn test_list_units_tool_honors_width() {
        let out = ListUnits.call(&json!({"kind": "length"}), &ctx()).unwrap();
        assert_eq!(out["units"], "m, km, AU, ly, pc");

        let narrow = ctx().with_list_width(10);
        let out = ListUnits.call(&json!({"kind": "length"}), &narrow).unwrap();
        assert_eq!(out["units"], "m, km, AU");
    }

    #[test]
    fn test_select_unit_tool() {
        let out = SelectUnit.call(&json!({"kind": "time", "value": 18000}), &ctx()).unwrap();
        assert_eq!(out["unit"], "hours");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 5.0, max_relative = 1e-12);

        let err = SelectUnit.call(&json!({"kind": "mass", "value": 1}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_unit_name_tool_clamps() {
        let out = UnitName.call(&json!({"kind": "time", "index": 99}), &ctx()).unwrap();
        assert_eq!(out["unit"], "years");
        let out = UnitName.call(&json!({"kind": "time", "index": -1}), &ctx()).unwrap();
        assert_eq!(out["unit"], "seconds");
        assert!(UnitName.call(&json!({"kind": "time", "index": 1.5}), &ctx()).is_err());
    }

    #[test]
    fn test_optional_unit() {
        let args = json!({"sma_unit": "AU", "bad": "lightyears"});
        assert_eq!(optional_unit::<LengthUnit>(&args, "t", "sma_unit").unwrap(), LengthUnit::AstronomicalUnits);
        assert_eq!(optional_unit::<TimeUnit>(&args, "t", "missing").unwrap(), TimeUnit::Seconds);
        let err = optional_unit::<LengthUnit>(&args, "t", "bad").unwrap_err();
        assert_eq!(err.location.as_deref(), Some("t.bad"));
    }
}
