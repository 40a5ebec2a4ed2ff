//! Search Lookup
//!
//! Stand-in for a real web search integration. Echoes the query inside a
//! fixed sentence; performs no I/O and cannot fail.

#[derive(Debug, Clone, Default)]
pub struct SearchTool;

impl SearchTool {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, query: &str) -> String {
        format!(
            "Web search results for '{}': This feature would integrate with a web search API to provide real-time information. For demonstration purposes, this shows where search results would appear.",
            query
        )
    }
}
