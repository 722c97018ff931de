//! Argument extraction shared by tools

use exo_core::ExoError;
use serde_json::{Map, Value as JsonValue};
use crate::ToolMeta;

fn type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "Null",
        JsonValue::Bool(_) => "Bool",
        JsonValue::Number(_) => "Number",
        JsonValue::String(_) => "Text",
        JsonValue::Array(_) => "List",
        JsonValue::Object(_) => "Object",
    }
}

/// Extract a required number argument
///
/// Numeric strings are accepted so callers can pass values such as `"1.5e11"`.
pub fn extract_number(args: &JsonValue, tool: &str, arg: &str) -> Result<f64, ExoError> {
    match args.get(arg) {
        Some(JsonValue::Number(n)) => n.as_f64()
            .ok_or_else(|| ExoError::arg_type(tool, arg, "Number", "out-of-range Number")),
        Some(JsonValue::String(s)) => s.trim().parse::<f64>()
            .map_err(|_| ExoError::arg_type(tool, arg, "Number", "Text")),
        Some(other) => Err(ExoError::arg_type(tool, arg, "Number", type_name(other))),
        None => Err(ExoError::arg_type(tool, arg, "Number", "missing")),
    }
}

/// Extract a number argument, using `default` when it is missing or null
pub fn extract_optional_number(args: &JsonValue, tool: &str, arg: &str, default: f64) -> Result<f64, ExoError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(default),
        Some(_) => extract_number(args, tool, arg),
    }
}

/// Extract a required text argument
pub fn extract_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<&'a str, ExoError> {
    match args.get(arg) {
        Some(JsonValue::String(s)) => Ok(s.as_str()),
        Some(other) => Err(ExoError::arg_type(tool, arg, "Text", type_name(other))),
        None => Err(ExoError::arg_type(tool, arg, "Text", "missing")),
    }
}

/// Extract an optional text argument (missing or null gives `None`)
pub fn extract_optional_text<'a>(args: &'a JsonValue, tool: &str, arg: &str) -> Result<Option<&'a str>, ExoError> {
    match args.get(arg) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(ExoError::arg_type(tool, arg, "Text", type_name(other))),
    }
}

/// Bind positional arguments to the names declared in `meta.args`
///
/// Values bind in declaration order, so every argument up to the last
/// required one must be given, optional ones in between included. Fails
/// when that prefix is not covered or more values than declared arguments
/// are given.
pub fn bind_positional(meta: &ToolMeta, values: &[JsonValue]) -> Result<JsonValue, ExoError> {
    let min_len = meta.args.iter().rposition(|a| !a.optional).map_or(0, |i| i + 1);
    if values.len() < min_len {
        return Err(ExoError::arg_count(meta.name, min_len, values.len()));
    }
    if values.len() > meta.args.len() {
        return Err(ExoError::arg_count(meta.name, meta.args.len(), values.len()));
    }

    let bound: Map<String, JsonValue> = meta.args.iter()
        .zip(values)
        .map(|(arg, value)| (arg.name.to_string(), value.clone()))
        .collect();
    Ok(JsonValue::Object(bound))
}
