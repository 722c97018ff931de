//! Call context

/// Width cap applied to unit listings unless configured otherwise
pub const DEFAULT_LIST_WIDTH: usize = 80;

/// Settings passed to every tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolContext {
    pub list_width: usize,
    pub tracing: bool,
}

impl ToolContext {
    pub fn new() -> Self {
        Self {
            list_width: DEFAULT_LIST_WIDTH,
            tracing: false,
        }
    }

    pub fn with_list_width(mut self, width: usize) -> Self {
        self.list_width = width;
        self
    }

    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.tracing = enabled;
        self
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}
