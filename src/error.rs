//! Error types for the MCP client.
//!
//! Transport failures are classified here so the dispatcher can report them
//! uniformly. Application errors (an `error` member in a JSON-RPC response)
//! are not errors at this level; the response is still handed back.

/// MCP client errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused, DNS, reset).
    #[error("{0}")]
    Transport(String),

    /// The request timed out.
    #[error("request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success HTTP status.
    #[error("HTTP status {status}: {message}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Human-readable error message
        message: String,
    },

    /// The response body was not valid JSON.
    #[error("invalid JSON response: {0}")]
    Decode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if let Some(status) = err.status() {
            ClientError::Status {
                status: status.as_u16(),
                message,
            }
        } else if err.is_timeout() {
            ClientError::Timeout(message)
        } else if err.is_decode() {
            ClientError::Decode(message)
        } else {
            ClientError::Transport(message)
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Render an error together with its sources.
///
/// reqwest keeps the interesting part ("Connection refused") in the source
/// chain, so the top-level message alone is not very useful.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i64 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i64 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i64 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i64 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i64 = -32603;

    /// Short name of a standard JSON-RPC error code, if it is one.
    pub fn name(code: i64) -> Option<&'static str> {
        match code {
            PARSE_ERROR => Some("parse error"),
            INVALID_REQUEST => Some("invalid request"),
            METHOD_NOT_FOUND => Some("method not found"),
            INVALID_PARAMS => Some("invalid params"),
            INTERNAL_ERROR => Some("internal error"),
            _ => None,
        }
    }
}

/// Result type for MCP client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
