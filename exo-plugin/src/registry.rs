//! Tool Registry

use crate::{ToolPlugin, ToolMeta, ToolContext};
use crate::helpers::bind_positional;
use exo_core::ExoError;
use serde_json::Value as JsonValue;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Central tool registry
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn ToolPlugin>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn with_tool<T: ToolPlugin + 'static>(mut self, t: T) -> Self {
        let name = t.meta().name.to_lowercase();
        self.tools.insert(name, Arc::new(t));
        self
    }

    pub fn get_tool(&self, name: &str) -> Option<&dyn ToolPlugin> {
        self.tools.get(&name.to_lowercase()).map(|t| t.as_ref())
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn call_tool(&self, name: &str, args: &JsonValue, ctx: &ToolContext) -> Result<JsonValue, ExoError> {
        match self.get_tool(name) {
            Some(t) => {
                if ctx.tracing {
                    debug!(tool = name, %args, "calling tool");
                }
                match args {
                    JsonValue::Array(values) => t.call(&bind_positional(&t.meta(), values)?, ctx),
                    _ => t.call(args, ctx),
                }
            }
            None => {
                // Find similar tool names for better error message
                let similar = self.find_similar_tools(name);
                let mut err = ExoError::undefined_tool(name);
                if !similar.is_empty() {
                    let suggestions: Vec<&str> = similar.iter().take(3).map(|s| s.as_str()).collect();
                    err = err.with_suggestion(format!(
                        "Similar: {}. Use tools/list for full list.",
                        suggestions.join(", ")
                    ));
                }
                Err(err)
            }
        }
    }

    /// Metadata of every tool, sorted by category then name
    pub fn list_tools(&self, category: Option<&str>) -> Vec<ToolMeta> {
        let mut metas: Vec<ToolMeta> = self.tools.values()
            .map(|t| t.meta())
            .filter(|m| category.map_or(true, |c| m.category == c))
            .collect();
        metas.sort_by(|a, b| (a.category, a.name).cmp(&(b.category, b.name)));
        metas
    }

    /// Find tool names similar to the given name (for error suggestions)
    fn find_similar_tools(&self, name: &str) -> Vec<String> {
        let name_lower = name.to_lowercase();
        let mut matches: Vec<(String, usize)> = self.tools.keys()
            .filter_map(|tool_name| {
                let score = Self::similarity_score(&name_lower, tool_name);
                if score > 0 {
                    Some((tool_name.clone(), score))
                } else {
                    None
                }
            })
            .collect();

        // Higher score first, name breaks ties so suggestions are stable
        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        matches.into_iter().map(|(name, _)| name).collect()
    }

    /// Calculate similarity score between two strings
    fn similarity_score(query: &str, candidate: &str) -> usize {
        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        // Count shared characters
        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        // Penalize length difference
        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgMeta;
    use exo_core::codes;
    use serde_json::json;

    struct Echo;

    static ECHO_ARGS: [ArgMeta; 1] = [ArgMeta::required("value", "Any", "Value to echo")];

    impl ToolPlugin for Echo {
        fn meta(&self) -> ToolMeta {
            ToolMeta {
                name: "echo",
                description: "Return the argument unchanged",
                usage: "echo(value)",
                args: &ECHO_ARGS,
                returns: "Any",
                examples: &[],
                category: "test",
                related: &[],
            }
        }

        fn call(&self, args: &JsonValue, _ctx: &ToolContext) -> Result<JsonValue, ExoError> {
            Ok(args.get("value").cloned().unwrap_or(JsonValue::Null))
        }
    }

    #[test]
    fn test_call_registered_tool() {
        let registry = ToolRegistry::new().with_tool(Echo);
        let ctx = ToolContext::default();
        let out = registry.call_tool("ECHO", &json!({"value": 3}), &ctx).unwrap();
        assert_eq!(out, json!(3));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_positional_arguments() {
        let registry = ToolRegistry::new().with_tool(Echo);
        let ctx = ToolContext::default();
        assert_eq!(registry.call_tool("echo", &json!(["hi"]), &ctx).unwrap(), json!("hi"));

        let err = registry.call_tool("echo", &json!([1, 2]), &ctx).unwrap_err();
        assert_eq!(err.code, codes::ARG_COUNT);
    }

    #[test]
    fn test_unknown_tool_suggests_similar() {
        let registry = ToolRegistry::new().with_tool(Echo);
        let err = registry.call_tool("ech", &json!({}), &ToolContext::default()).unwrap_err();
        assert_eq!(err.code, codes::UNDEFINED_TOOL);
        let suggestion = err.suggestion.unwrap();
        assert!(suggestion.contains("echo"), "got: {}", suggestion);
    }

    #[test]
    fn test_list_tools_filters_category() {
        let registry = ToolRegistry::new().with_tool(Echo);
        assert_eq!(registry.list_tools(None).len(), 1);
        assert_eq!(registry.list_tools(Some("test")).len(), 1);
        assert!(registry.list_tools(Some("units")).is_empty());
    }
}
