//! # onyx-mcp-client
//!
//! Test client for an MCP (Model Context Protocol) server that speaks
//! JSON-RPC 2.0 over HTTP, such as the Onyx MCP server.
//!
//! Every request is printed before it is sent and every response is printed
//! as received, which makes the client useful for poking at a server by hand.
//!
//! ## Features
//!
//! - **Request dispatcher**: builds JSON-RPC envelopes with increasing string ids
//! - **Tool helpers**: argument builders for `search_onyx` and `chat_with_onyx`
//! - **Interactive mode**: a text menu that keeps chat sessions going across turns
//!
//! ## Library Usage
//!
//! ```no_run
//! use onyx_mcp_client::{ClientConfig, McpClient, SearchRequest};
//!
//! let mut client = McpClient::connect(ClientConfig::default()).expect("Failed to create client");
//! client.list_tools();
//! client.call_search_tool(&SearchRequest::new("release notes").max_results(3));
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod error;
pub mod interactive;
mod protocol;
mod session;
pub mod tools;

pub use client::{HttpTransport, McpClient, Transport};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_SERVER_URL};
pub use error::{rpc_codes, ClientError, Result};
pub use protocol::{response_error, JsonRpcRequest, RpcErrorInfo, JSONRPC_VERSION};
pub use session::{extract_chat_session_id, ChatSession};
pub use tools::{ChatRequest, SearchRequest, ToolDef};
