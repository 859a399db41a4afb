//! Search tool arguments.
//!
//! Tool: search_onyx

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Remote tool name.
pub const TOOL_NAME: &str = "search_onyx";

/// Default number of results.
pub const DEFAULT_MAX_RESULTS: u32 = 5;

/// Default number of context chunks above and below a match.
pub const DEFAULT_CHUNKS: u32 = 1;

/// Arguments for a `search_onyx` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    /// The search query
    pub query: String,
    /// Maximum number of results to return
    pub max_results: u32,
    /// Chunks to include above each match
    pub chunks_above: u32,
    /// Chunks to include below each match
    pub chunks_below: u32,
    /// Whether to retrieve whole documents instead of chunks
    pub retrieve_full_documents: bool,
    /// Document sets to search; all sets when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub document_sets: Vec<String>,
}

impl SearchRequest {
    /// Create a search with default options.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            max_results: DEFAULT_MAX_RESULTS,
            chunks_above: DEFAULT_CHUNKS,
            chunks_below: DEFAULT_CHUNKS,
            retrieve_full_documents: false,
            document_sets: Vec::new(),
        }
    }

    /// Set the maximum number of results.
    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = max_results;
        self
    }

    /// Set the context chunks above and below each match.
    pub fn chunks(mut self, above: u32, below: u32) -> Self {
        self.chunks_above = above;
        self.chunks_below = below;
        self
    }

    /// Retrieve full documents.
    pub fn retrieve_full_documents(mut self, yes: bool) -> Self {
        self.retrieve_full_documents = yes;
        self
    }

    /// Restrict to the given document sets.
    pub fn document_sets(mut self, sets: Vec<String>) -> Self {
        self.document_sets = sets;
        self
    }

    /// The `arguments` object sent with `call_tool`.
    pub fn arguments(&self) -> JsonValue {
        serde_json::to_value(self).unwrap_or_else(|_| JsonValue::Object(Default::default()))
    }
}
