//! Structured errors for tool consumers
//!
//! Errors never crash the process. They are values returned to the caller
//! with a machine-readable code and, where possible, a hint for fixing the
//! request.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
    pub const INVALID_UNIT: &str = "INVALID_UNIT";
    pub const NO_UNIT_MATCH: &str = "NO_UNIT_MATCH";
    pub const UNDEFINED_TOOL: &str = "UNDEFINED_TOOL";
    pub const METHOD_NOT_FOUND: &str = "METHOD_NOT_FOUND";
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const DOMAIN_ERROR: &str = "DOMAIN_ERROR";
    pub const INVALID_CONFIG: &str = "INVALID_CONFIG";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Work continues with a fallback
    Warning,
    /// Request failed
    Error,
}

/// Structured error returned by tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExoError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Tool or argument the error refers to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Severity level
    pub severity: Severity,
}

impl ExoError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            location: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set the tool or argument the error refers to
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn parse_error(details: impl Into<String>) -> Self {
        Self::new(codes::PARSE_ERROR, format!("Parse error: {}", details.into()))
            .with_suggestion("Send one JSON object per line")
    }

    pub fn invalid_unit(kind: &str, details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_UNIT, format!("Invalid {} unit: {}", kind, details.into()))
            .with_suggestion(format!("Use list_units(\"{}\") to see supported units", kind))
    }

    pub fn no_unit_match(kind: &str, text: &str) -> Self {
        Self::new(codes::NO_UNIT_MATCH, format!("Unknown {} unit: {}", kind, text))
            .with_suggestion(format!("Use list_units(\"{}\") to see supported units", kind))
    }

    pub fn undefined_tool(name: &str) -> Self {
        Self::new(codes::UNDEFINED_TOOL, format!("Unknown tool: {}", name))
            .with_suggestion("Use tools/list to see available tools")
    }

    pub fn method_not_found(method: &str) -> Self {
        Self::new(codes::METHOD_NOT_FOUND, format!("Method not found: {}", method))
            .with_suggestion("Supported methods: ping, tools/list, tools/call")
    }

    pub fn arg_count(tool: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", tool, expected, got))
            .at(tool)
    }

    pub fn arg_type(tool: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", tool, arg, expected, got))
            .at(format!("{}.{}", tool, arg))
    }

    pub fn domain_error(details: impl Into<String>) -> Self {
        Self::new(codes::DOMAIN_ERROR, format!("Domain error: {}", details.into()))
    }

    /// Unusable setting; the caller falls back to `default`
    pub fn invalid_config(name: &str, value: &str, default: impl std::fmt::Display) -> Self {
        Self::new(codes::INVALID_CONFIG, format!("Invalid {}: '{}'", name, value))
            .with_suggestion(format!("Using default {}", default))
            .at(name)
            .with_severity(Severity::Warning)
    }
}

impl std::fmt::Display for ExoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExoError {}
