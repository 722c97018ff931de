//! Exo Tool System
//!
//! Provides the traits and registry used to expose exo calculations as
//! named tools callable with JSON arguments.

mod traits;
mod registry;
mod context;
pub mod helpers;

pub use traits::{ToolPlugin, ToolMeta, ArgMeta};
pub use registry::ToolRegistry;
pub use context::{ToolContext, DEFAULT_LIST_WIDTH};

/// Re-export core types for tool authors
pub mod prelude {
    pub use crate::{ToolPlugin, ToolMeta, ArgMeta, ToolRegistry, ToolContext};
    pub use crate::helpers::{extract_number, extract_optional_number, extract_text, extract_optional_text};
    pub use exo_core::prelude::*;
    pub use serde_json::{json, Value as JsonValue};
}
