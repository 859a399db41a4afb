//! JSON-RPC 2.0 envelope.
//!
//! Requests are strongly typed. Responses are kept as raw JSON since the
//! server is free to answer with anything; the helpers here only peek.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::error::rpc_codes;

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JsonRpcRequest {
    /// Always `"2.0"`
    pub jsonrpc: String,
    /// Correlation id, a decimal string
    pub id: String,
    /// Remote method name
    pub method: String,
    /// Parameter object, `{}` when the method takes none
    pub params: Map<String, JsonValue>,
}

impl JsonRpcRequest {
    /// Build a request with the given numeric id.
    pub fn new(id: u64, method: &str, params: Option<Map<String, JsonValue>>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.to_string(),
            method: method.to_string(),
            params: params.unwrap_or_default(),
        }
    }
}

/// The `error` member of a JSON-RPC response.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcErrorInfo {
    /// Error code, if the server sent a numeric one
    pub code: Option<i64>,
    /// Error message, or the raw `error` value when it has no message
    pub message: String,
}

impl std::fmt::Display for RpcErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(name) = self.code.and_then(rpc_codes::name) {
            write!(f, " ({})", name)?;
        }
        Ok(())
    }
}

/// Extract the application error from a response, if it has one.
///
/// An `error` member that is `null` counts as no error.
pub fn response_error(response: &JsonValue) -> Option<RpcErrorInfo> {
    let error = response.get("error").filter(|e| !e.is_null())?;

    let message = match error.get("message") {
        Some(JsonValue::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => error.to_string(),
    };

    Some(RpcErrorInfo {
        code: error.get("code").and_then(JsonValue::as_i64),
        message,
    })
}
