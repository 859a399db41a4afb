//! Chat tool arguments.
//!
//! Tool: chat_with_onyx

use serde::Serialize;
use serde_json::Value as JsonValue;

/// Remote tool name.
pub const TOOL_NAME: &str = "chat_with_onyx";

/// Arguments for a `chat_with_onyx` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The chat question
    pub query: String,
    /// Persona to answer with; the server default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona_id: Option<i64>,
    /// Existing chat session to continue
    #[serde(skip_serializing_if = "is_blank")]
    pub chat_session_id: Option<String>,
    /// Document sets to draw from; all sets when empty
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub document_sets: Vec<String>,
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

impl ChatRequest {
    /// Create a chat turn with no options.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            persona_id: None,
            chat_session_id: None,
            document_sets: Vec::new(),
        }
    }

    /// Answer with the given persona.
    pub fn persona_id(mut self, persona_id: Option<i64>) -> Self {
        self.persona_id = persona_id;
        self
    }

    /// Continue the given chat session.
    pub fn chat_session_id(mut self, session_id: Option<String>) -> Self {
        self.chat_session_id = session_id;
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
