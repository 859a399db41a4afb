//! Remote tool definitions and argument builders.
//!
//! The server exposes its tools through two generic methods: `list_tools`
//! and `call_tool` with a `{name, arguments}` payload.

pub mod chat;
pub mod search;

pub use chat::ChatRequest;
pub use search::SearchRequest;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Method that lists the server's tools.
pub const LIST_TOOLS_METHOD: &str = "list_tools";

/// Method that invokes a named tool.
pub const CALL_TOOL_METHOD: &str = "call_tool";

/// A tool definition from the `list_tools` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "search_onyx")
    pub name: String,
    /// Tool description
    #[serde(default)]
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema", default)]
    pub input_schema: JsonValue,
}

/// Pull tool definitions out of a `list_tools` response.
///
/// Entries that don't look like tools are skipped.
pub fn tool_list(response: &JsonValue) -> Vec<ToolDef> {
    response
        .get("result")
        .and_then(|r| r.get("tools"))
        .and_then(JsonValue::as_array)
        .map(|tools| {
            tools
                .iter()
                .filter_map(|t| serde_json::from_value(t.clone()).ok())
                .collect()
        })
        .unwrap_or_default()
}

/// Build `call_tool` params for the named tool.
pub fn call_tool_params(name: &str, arguments: JsonValue) -> Map<String, JsonValue> {
    let mut params = Map::new();
    params.insert("name".to_string(), JsonValue::String(name.to_string()));
    params.insert("arguments".to_string(), arguments);
    params
}
