//! Exo Tool Server
//!
//! Reads one JSON request per line from stdin and writes one JSON response
//! per line to stdout. Logs go to stderr.
//!
//! Methods:
//! - ping: Liveness check
//! - tools/list: Metadata of every registered tool
//! - tools/call: Run a tool by name with named or positional arguments
//!
//! Environment:
//! - RUST_LOG: log filter (default: info)
//! - EXO_LIST_WIDTH: maximum length of unit listings (default: 80)

use std::env;
use std::io::{self, BufRead, Write};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing::{debug, error, info, warn};
use tracing_subscriber::{prelude::*, registry::Registry, EnvFilter};
use exo_core::ExoError;
use exo_plugin::{ToolContext, ToolRegistry, DEFAULT_LIST_WIDTH};

const SERVER_NAME: &str = "exo-tools";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
const LIST_WIDTH_VAR: &str = "EXO_LIST_WIDTH";

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ExoError>,
}

impl Response {
    fn new(id: Option<JsonValue>, result: Result<JsonValue, ExoError>) -> Self {
        match result {
            Ok(r) => Response { id, result: Some(r), error: None },
            Err(e) => Response { id, result: None, error: Some(e) },
        }
    }
}

/// Registry with every exo tool library loaded
fn create_registry() -> ToolRegistry {
    let registry = exo_units::load_units_library(ToolRegistry::new());
    exo_orbits::load_orbits_library(registry)
}

/// Listing width from the raw `EXO_LIST_WIDTH` value
///
/// Unset means the default; anything but a positive integer is a
/// warning-severity error.
fn parse_list_width(raw: Option<&str>) -> Result<usize, ExoError> {
    match raw.map(str::trim) {
        None => Ok(DEFAULT_LIST_WIDTH),
        Some(text) => match text.parse::<usize>() {
            Ok(width) if width > 0 => Ok(width),
            _ => Err(ExoError::invalid_config(LIST_WIDTH_VAR, text, DEFAULT_LIST_WIDTH)),
        },
    }
}

fn context_from_env() -> ToolContext {
    let width = parse_list_width(env::var(LIST_WIDTH_VAR).ok().as_deref()).unwrap_or_else(|e| {
        warn!(severity = ?e.severity, "{}", e);
        DEFAULT_LIST_WIDTH
    });
    ToolContext::new()
        .with_list_width(width)
        .with_tracing(tracing::enabled!(tracing::Level::DEBUG))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(io::stderr);
    let subscriber = Registry::default().with(filter).with(fmt_layer);

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Could not install log subscriber: {}", e);
    }
}

fn main() {
    init_logging();

    let registry = create_registry();
    let ctx = context_from_env();

    info!(version = SERVER_VERSION, tools = registry.len(), list_width = ctx.list_width, "{} started", SERVER_NAME);

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let Some(response) = handle_line(&registry, &ctx, &line) else {
                    continue;
                };

                let response_json = match serde_json::to_string(&response) {
                    Ok(s) => s,
                    Err(e) => {
                        error!(error = %e, "could not serialize response");
                        continue;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", response_json).and_then(|_| stdout.flush()) {
                    error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                error!(error = %e, "error reading input");
                break;
            }
        }
    }

    info!("server shutting down");
}

/// Handle one input line; `None` means nothing should be written back
fn handle_line(registry: &ToolRegistry, ctx: &ToolContext, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    debug!(bytes = line.len(), "received");

    let request: Request = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "error parsing request");
            return Some(Response::new(None, Err(ExoError::parse_error(e.to_string()))));
        }
    };

    let response = handle_request(registry, ctx, &request);

    // Notifications (no id) get no response
    if request.id.is_none() {
        debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn handle_request(registry: &ToolRegistry, ctx: &ToolContext, request: &Request) -> Response {
    debug!(method = %request.method, "processing");

    let result = match request.method.as_str() {
        "ping" => Ok(json!({})),
        "tools/list" => handle_tools_list(registry, &request.params),
        "tools/call" => handle_tool_call(registry, ctx, &request.params),
        _ => Err(ExoError::method_not_found(&request.method)),
    };

    if let Err(ref e) = result {
        debug!(method = %request.method, code = %e.code, "request failed");
    }
    Response::new(request.id.clone(), result)
}

fn handle_tools_list(registry: &ToolRegistry, params: &Option<JsonValue>) -> Result<JsonValue, ExoError> {
    let category = params.as_ref()
        .and_then(|p| p.get("category"))
        .and_then(|c| c.as_str());

    Ok(json!({
        "server": { "name": SERVER_NAME, "version": SERVER_VERSION },
        "tools": registry.list_tools(category),
    }))
}

fn handle_tool_call(registry: &ToolRegistry, ctx: &ToolContext, params: &Option<JsonValue>) -> Result<JsonValue, ExoError> {
    let params = params.as_ref()
        .ok_or_else(|| ExoError::arg_type("tools/call", "params", "Object", "missing"))?;

    let name = params.get("name")
        .and_then(|n| n.as_str())
        .ok_or_else(|| ExoError::arg_type("tools/call", "name", "Text", "missing"))?;

    let empty = json!({});
    let args = params.get("arguments").unwrap_or(&empty);

    registry.call_tool(name, args, ctx)
}
