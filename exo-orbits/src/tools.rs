//! Orbit tools
//!
//! Every quantity argument takes an optional companion `<arg>_unit`; values
//! are converted to SI through the unit core before the formulas run.

use exo_plugin::prelude::*;
use exo_units::{
    Unit, UnitKind, LengthUnit, TimeUnit, MassUnit, QuantityKind,
    to_base, from_base, parse_unit, select_length_unit, select_time_unit, UnitError,
};
use exo_units::tools::optional_unit;
use tracing::trace;
use crate::kepler;

/// Read `arg` in the unit named by `<arg>_unit` (base unit when absent) and return it in SI
fn si_arg<U: UnitKind + Into<Unit>>(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, ExoError> {
    let value = extract_number(args, tool, arg)?;
    let unit: U = optional_unit(args, tool, &format!("{}_unit", arg))?;
    Ok(to_base(value, unit.into()))
}

fn optional_si_arg<U: UnitKind + Into<Unit>>(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, ExoError> {
    let value = extract_optional_number(args, tool, arg, 0.0)?;
    let unit: U = optional_unit(args, tool, &format!("{}_unit", arg))?;
    Ok(to_base(value, unit.into()))
}

/// Express an SI result in `result_unit` when given, otherwise in the selected default
fn render(args: &JsonValue, tool: &str, kind: QuantityKind, si: f64, default: Unit) -> Result<JsonValue, ExoError> {
    let unit = match extract_optional_text(args, tool, "result_unit")? {
        Some(text) => parse_unit(kind, text).ok_or_else(|| {
            ExoError::from(UnitError::NoUnitMatch { kind, text: text.to_string() })
                .at(format!("{}.result_unit", tool))
        })?,
        None => default,
    };
    trace!(tool, si, %unit, "orbit result");

    Ok(json!({
        "si": si,
        "si_unit": kind.base_unit_name(),
        "value": from_base(si, unit),
        "unit": unit.name(),
    }))
}

static MASS_ARGS_NOTE: &str = "Mass units: kg, Mearth, Mjup, Msun";

// ============ period ============

pub struct Period;

static PERIOD_ARGS: [ArgMeta; 7] = [
    ArgMeta::required("sma", "Number", "Semimajor axis"),
    ArgMeta::optional("sma_unit", "Text", "Unit of sma", "m"),
    ArgMeta::required("host_mass", "Number", "Mass of the central body"),
    ArgMeta::optional("host_mass_unit", "Text", "Unit of host_mass", "kg"),
    ArgMeta::optional("sat_mass", "Number", "Mass of the orbiting body", "0"),
    ArgMeta::optional("sat_mass_unit", "Text", "Unit of sat_mass", "kg"),
    ArgMeta::optional("result_unit", "Text", "Time unit of the result", "selected"),
];

static PERIOD_EXAMPLES: [&str; 2] = [
    "period(1, \"AU\", 1, \"Msun\") → 1.0 years",
    "period(0.05, \"AU\", 1, \"Msun\", 1, \"Mjup\") → 4.08 days",
];

static PERIOD_RELATED: [&str; 2] = ["semimajor_axis", "combined_mass"];

impl ToolPlugin for Period {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "period",
            description: "Orbital period from semimajor axis and masses (Kepler's third law)",
            usage: "period(sma, sma_unit?, host_mass, host_mass_unit?, sat_mass?, sat_mass_unit?, result_unit?)",
            args: &PERIOD_ARGS,
            returns: "{si: Number, si_unit: Text, value: Number, unit: Text}",
            examples: &PERIOD_EXAMPLES,
            category: "orbits",
            related: &PERIOD_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let sma = si_arg::<LengthUnit>(args, "period", "sma")?;
        let host = si_arg::<MassUnit>(args, "period", "host_mass")?;
        let sat = optional_si_arg::<MassUnit>(args, "period", "sat_mass")?;

        if host + sat == 0.0 {
            return Err(ExoError::domain_error("period(): combined mass is zero")
                .with_suggestion(MASS_ARGS_NOTE));
        }

        let t = kepler::period(sma, host, sat);
        render(args, "period", QuantityKind::Time, t, Unit::Time(select_time_unit(t)))
    }
}

// ============ semimajor_axis ============

pub struct SemimajorAxis;

static SMA_ARGS: [ArgMeta; 7] = [
    ArgMeta::required("period", "Number", "Orbital period"),
    ArgMeta::optional("period_unit", "Text", "Unit of period", "seconds"),
    ArgMeta::required("host_mass", "Number", "Mass of the central body"),
    ArgMeta::optional("host_mass_unit", "Text", "Unit of host_mass", "kg"),
    ArgMeta::optional("sat_mass", "Number", "Mass of the orbiting body", "0"),
    ArgMeta::optional("sat_mass_unit", "Text", "Unit of sat_mass", "kg"),
    ArgMeta::optional("result_unit", "Text", "Length unit of the result", "selected"),
];

static SMA_EXAMPLES: [&str; 1] = [
    "semimajor_axis(1, \"yr\", 1, \"Msun\") → 1.0 AU",
];

static SMA_RELATED: [&str; 2] = ["period", "perihelion"];

impl ToolPlugin for SemimajorAxis {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "semimajor_axis",
            description: "Semimajor axis from orbital period and masses (Kepler's third law)",
            usage: "semimajor_axis(period, period_unit?, host_mass, host_mass_unit?, sat_mass?, sat_mass_unit?, result_unit?)",
            args: &SMA_ARGS,
            returns: "{si: Number, si_unit: Text, value: Number, unit: Text}",
            examples: &SMA_EXAMPLES,
            category: "orbits",
            related: &SMA_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let t = si_arg::<TimeUnit>(args, "semimajor_axis", "period")?;
        let host = si_arg::<MassUnit>(args, "semimajor_axis", "host_mass")?;
        let sat = optional_si_arg::<MassUnit>(args, "semimajor_axis", "sat_mass")?;

        let a = kepler::semimajor_axis(t, host, sat);
        render(args, "semimajor_axis", QuantityKind::Length, a, Unit::Length(select_length_unit(a)))
    }
}

// ============ combined_mass ============

pub struct CombinedMass;

static MASS_ARGS: [ArgMeta; 5] = [
    ArgMeta::required("sma", "Number", "Semimajor axis"),
    ArgMeta::optional("sma_unit", "Text", "Unit of sma", "m"),
    ArgMeta::required("period", "Number", "Orbital period"),
    ArgMeta::optional("period_unit", "Text", "Unit of period", "seconds"),
    ArgMeta::optional("result_unit", "Text", "Mass unit of the result", "kg"),
];

static MASS_EXAMPLES: [&str; 1] = [
    "combined_mass(1, \"AU\", 1, \"yr\", \"Msun\") → 1.0 Msun",
];

static MASS_RELATED: [&str; 1] = ["period"];

impl ToolPlugin for CombinedMass {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "combined_mass",
            description: "Total system mass from semimajor axis and period (Kepler's third law)",
            usage: "combined_mass(sma, sma_unit?, period, period_unit?, result_unit?)",
            args: &MASS_ARGS,
            returns: "{si: Number, si_unit: Text, value: Number, unit: Text}",
            examples: &MASS_EXAMPLES,
            category: "orbits",
            related: &MASS_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        let a = si_arg::<LengthUnit>(args, "combined_mass", "sma")?;
        let t = si_arg::<TimeUnit>(args, "combined_mass", "period")?;

        if t == 0.0 {
            return Err(ExoError::domain_error("combined_mass(): period is zero"));
        }

        let m = kepler::combined_mass(a, t);
        render(args, "combined_mass", QuantityKind::Mass, m, Unit::Mass(MassUnit::Kilograms))
    }
}

// ============ perihelion / aphelion ============

static APSIS_ARGS: [ArgMeta; 3] = [
    ArgMeta::required("sma", "Number", "Semimajor axis"),
    ArgMeta::optional("sma_unit", "Text", "Unit of sma; the result uses the same unit", "m"),
    ArgMeta::required("eccentricity", "Number", "Orbital eccentricity"),
];

static APSIS_RELATED: [&str; 2] = ["perihelion", "aphelion"];

fn apsis(args: &JsonValue, tool: &str, f: fn(f64, f64) -> f64) -> Result<JsonValue, ExoError> {
    let sma = extract_number(args, tool, "sma")?;
    let e = extract_number(args, tool, "eccentricity")?;
    let unit: LengthUnit = optional_unit(args, tool, "sma_unit")?;

    let value = f(sma, e);
    Ok(json!({
        "value": value,
        "unit": unit.display_name(),
        "si": to_base(value, unit.into()),
        "si_unit": QuantityKind::Length.base_unit_name(),
    }))
}

pub struct Perihelion;

static PERIHELION_EXAMPLES: [&str; 1] = [
    "perihelion(1, \"AU\", 0.0167) → 0.9833 AU",
];

impl ToolPlugin for Perihelion {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "perihelion",
            description: "Closest approach distance, sma * (1 - e)",
            usage: "perihelion(sma, sma_unit?, eccentricity)",
            args: &APSIS_ARGS,
            returns: "{value: Number, unit: Text, si: Number, si_unit: Text}",
            examples: &PERIHELION_EXAMPLES,
            category: "orbits",
            related: &APSIS_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        apsis(args, "perihelion", kepler::perihelion)
    }
}

pub struct Aphelion;

static APHELION_EXAMPLES: [&str; 1] = [
    "aphelion(1, \"AU\", 0.0167) → 1.0167 AU",
];

impl ToolPlugin for Aphelion {
    fn meta(&self) -> ToolMeta {
        ToolMeta {
            name: "aphelion",
            description: "Farthest distance, sma * (1 + e)",
            usage: "aphelion(sma, sma_unit?, eccentricity)",
            args: &APSIS_ARGS,
            returns: "{value: Number, unit: Text, si: Number, si_unit: Text}",
            examples: &APHELION_EXAMPLES,
            category: "orbits",
            related: &APSIS_RELATED,
        }
    }

    fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        apsis(args, "aphelion", kepler::aphelion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use exo_core::constants::{METERS_PER_AU, SOLAR_MASS};

    fn ctx() -> ToolContext {
        ToolContext::default()
    }

    #[test]
    fn test_period_tool_selects_years() {
        let out = Period.call(&json!({"sma": 1, "sma_unit": "AU", "host_mass": 1, "host_mass_unit": "Msun"}), &ctx()).unwrap();
        assert_eq!(out["unit"], "years");
        assert_eq!(out["si_unit"], "seconds");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn test_period_tool_si_defaults() {
        let out = Period.call(&json!({"sma": METERS_PER_AU, "host_mass": SOLAR_MASS, "result_unit": "d"}), &ctx()).unwrap();
        assert_eq!(out["unit"], "days");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 365.25, max_relative = 1e-3);
    }

    #[test]
    fn test_period_tool_rejects_zero_mass() {
        let err = Period.call(&json!({"sma": 1, "host_mass": 0}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::DOMAIN_ERROR);
    }

    #[test]
    fn test_unit_argument_errors() {
        let err = Period.call(&json!({"sma": 1, "sma_unit": "yr", "host_mass": 1}), &ctx()).unwrap_err();
        assert_eq!(err.code, codes::NO_UNIT_MATCH);
        assert_eq!(err.location.as_deref(), Some("period.sma_unit"));

        let err = SemimajorAxis.call(&json!({"period": 1, "host_mass": 1, "result_unit": "kg"}), &ctx()).unwrap_err();
        assert_eq!(err.location.as_deref(), Some("semimajor_axis.result_unit"));
    }

    #[test]
    fn test_semimajor_axis_tool() {
        let out = SemimajorAxis.call(&json!({"period": 1, "period_unit": "yr", "host_mass": 1, "host_mass_unit": "Msun"}), &ctx()).unwrap();
        assert_eq!(out["unit"], "AU");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 1.0, max_relative = 1e-3);
    }

    #[test]
    fn test_combined_mass_tool() {
        let out = CombinedMass.call(
            &json!({"sma": 1, "sma_unit": "AU", "period": 1, "period_unit": "years", "result_unit": "Msun"}),
            &ctx(),
        ).unwrap();
        assert_eq!(out["unit"], "Msun");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 1.0, max_relative = 2e-3);

        let out = CombinedMass.call(&json!({"sma": 1, "period": 1}), &ctx()).unwrap();
        assert_eq!(out["unit"], "kg");

        assert!(CombinedMass.call(&json!({"sma": 1, "period": 0}), &ctx()).is_err());
    }

    #[test]
    fn test_apsis_tools_keep_input_unit() {
        let out = Perihelion.call(&json!({"sma": 1, "sma_unit": "AU", "eccentricity": 0.0167}), &ctx()).unwrap();
        assert_eq!(out["unit"], "AU");
        assert_relative_eq!(out["value"].as_f64().unwrap(), 0.9833, max_relative = 1e-12);
        assert_relative_eq!(out["si"].as_f64().unwrap(), 0.9833 * METERS_PER_AU, max_relative = 1e-12);

        let out = Aphelion.call(&json!({"sma": 10, "eccentricity": 0.5}), &ctx()).unwrap();
        assert_eq!(out["unit"], "m");
        assert_eq!(out["value"].as_f64().unwrap(), 15.0);
    }
}
