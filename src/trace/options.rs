//! Trace visitor options

use tracing::Level;

/// Options for [`TraceVisitor`](super::TraceVisitor)
#[derive(Debug, Clone)]
pub struct TraceOptions {
    /// Number of spaces per nesting level when rendering events
    pub indent_width: usize,
    /// Level at which each handler call is emitted
    pub level: Level,
    /// Keep events in memory (false = only emit them)
    pub record: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            indent_width: 2,
            level: Level::DEBUG,
            record: true,
        }
    }
}

impl TraceOptions {
    /// Generate indentation string for the given nesting depth
    pub fn indent(&self, depth: usize) -> String {
        " ".repeat(self.indent_width * depth)
    }
}
