//! Exo Orbits - Kepler's third law
//!
//! Period, semimajor axis and combined mass of a two-body orbit, plus
//! perihelion and aphelion distances. The formulas work on SI values; the
//! tools accept any supported unit and convert through exo-units.

mod kepler;
pub mod tools;

pub use kepler::{period, semimajor_axis, combined_mass, perihelion, aphelion};

use exo_plugin::ToolRegistry;

/// Load orbit tools into registry
pub fn load_orbits_library(registry: ToolRegistry) -> ToolRegistry {
    registry
        // Kepler's third law
        .with_tool(tools::Period)
        .with_tool(tools::SemimajorAxis)
        .with_tool(tools::CombinedMass)

        // Apsides
        .with_tool(tools::Perihelion)
        .with_tool(tools::Aphelion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_registers_all_tools() {
        let registry = load_orbits_library(ToolRegistry::new());
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.list_tools(Some("orbits")).len(), 5);
        assert!(registry.get_tool("semimajor_axis").is_some());
    }

    #[test]
    fn test_minimal_positional_period_call() {
        use exo_core::codes;
        use exo_plugin::{ToolContext, prelude::json};

        let registry = load_orbits_library(ToolRegistry::new());
        let ctx = ToolContext::default();

        let err = registry.call_tool("period", &json!([1.495978707e11, 1.98841e30]), &ctx).unwrap_err();
        assert_eq!(err.code, codes::ARG_COUNT);
        assert!(err.message.contains("expects 3 arguments, got 2"), "got: {}", err.message);

        let out = registry.call_tool("period", &json!([1.495978707e11, null, 1.98841e30]), &ctx).unwrap();
        assert_eq!(out["unit"], "years");

        let out = registry.call_tool("period", &json!([1, "AU", 1, "Msun"]), &ctx).unwrap();
        assert_eq!(out["unit"], "years");

        let err = registry.call_tool("perihelion", &json!([1, 0.5]), &ctx).unwrap_err();
        assert_eq!(err.code, codes::ARG_COUNT);
    }
}
