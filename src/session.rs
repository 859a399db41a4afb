//! Chat session continuity.
//!
//! The chat tool hands back a session id in the metadata of its content
//! items. Passing it into the next chat call continues the conversation.

use serde_json::Value as JsonValue;

/// Chat session state held across chat turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    id: Option<String>,
}

impl ChatSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session id, if a chat has returned one.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Forget the current session.
    pub fn clear(&mut self) {
        self.id = None;
    }

    /// Pick up the session id from a chat response.
    ///
    /// Returns the new id when one was found. A response without one leaves
    /// the current session untouched.
    pub fn update_from(&mut self, response: &JsonValue) -> Option<&str> {
        let id = extract_chat_session_id(response)?;
        tracing::debug!(session_id = %id, "chat session updated");
        self.id = Some(id);
        self.id.as_deref()
    }
}

/// Find `result.content[].metadata.chat_session_id` in a chat response.
///
/// The first content item carrying a usable one wins; `null` and empty ids
/// are skipped. Missing keys at any level yield `None`. Numeric ids are
/// returned as their decimal text.
pub fn extract_chat_session_id(response: &JsonValue) -> Option<String> {
    let content = response.get("result")?.get("content")?.as_array()?;

    content.iter().find_map(|item| {
        match item.get("metadata")?.get("chat_session_id")? {
            JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    })
}
