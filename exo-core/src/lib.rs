//! Exo Core - Fundamental types
//!
//! This crate provides the types shared by every exo crate:
//! - `ExoError`: Structured errors returned to tool callers
//! - `constants`: Physical constants in SI units

mod error;
pub mod constants;

pub use error::{ExoError, Severity, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{ExoError, Severity};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ExoError::undefined_tool("convrt");
        let s = format!("{}", err);
        assert!(s.starts_with("[UNDEFINED_TOOL] Unknown tool: convrt"), "got: {}", s);
        assert!(s.contains("suggestion"));
    }

    #[test]
    fn test_error_builders() {
        let err = ExoError::arg_type("convert", "value", "Number", "Text");
        assert_eq!(err.code, codes::ARG_TYPE);
        assert_eq!(err.location.as_deref(), Some("convert.value"));
        assert_eq!(err.severity, Severity::Error);

        let err = ExoError::invalid_config("EXO_LIST_WIDTH", "wide", 80);
        assert_eq!(err.code, codes::INVALID_CONFIG);
        assert_eq!(err.severity, Severity::Warning);
        assert_eq!(err.location.as_deref(), Some("EXO_LIST_WIDTH"));
        assert_eq!(err.suggestion.as_deref(), Some("Using default 80"));
    }

    #[test]
    fn test_error_serialization_skips_empty_fields() {
        let err = ExoError::domain_error("negative period");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "DOMAIN_ERROR");
        assert_eq!(json["severity"], "error");
        assert!(json.get("suggestion").is_none());
        assert!(json.get("location").is_none());
    }
}
