//! MCP client implementation.
//!
//! Sends JSON-RPC 2.0 requests over HTTP POST, one at a time, and prints the
//! raw request and response to the client's output.

use std::fmt;
use std::io::{self, Write};

use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value as JsonValue};

use crate::config::ClientConfig;
use crate::error::Result;
use crate::protocol::{response_error, JsonRpcRequest};
use crate::tools::{self, ChatRequest, SearchRequest};

/// Moves JSON to and from the server.
///
/// Any failure to obtain a JSON body (network, non-2xx status, bad JSON) is
/// an error here.
pub trait Transport {
    /// POST a serialized JSON body and decode the JSON response.
    fn post_json(&self, url: &str, body: String) -> Result<JsonValue>;

    /// GET a URL and decode the JSON response.
    fn get_json(&self, url: &str) -> Result<JsonValue>;
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Create a transport with the HTTP library's default timeouts.
    pub fn new() -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &str, body: String) -> Result<JsonValue> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?
            .error_for_status()?;
        Ok(response.json()?)
    }

    fn get_json(&self, url: &str) -> Result<JsonValue> {
        let response = self.http.get(url).send()?.error_for_status()?;
        Ok(response.json()?)
    }
}

/// MCP client.
///
/// Owns the request counter: ids start at 1 and go up by one for every
/// request built, whether or not it reaches the server.
pub struct McpClient<T = HttpTransport, W = io::Stdout> {
    config: ClientConfig,
    transport: T,
    out: W,
    next_id: u64,
}

impl McpClient<HttpTransport, io::Stdout> {
    /// Create an HTTP client that prints to stdout.
    pub fn connect(config: ClientConfig) -> Result<Self> {
        Ok(Self::with_transport(config, HttpTransport::new()?, io::stdout()))
    }
}

impl<T: Transport, W: Write> McpClient<T, W> {
    /// Create a client over any transport and output.
    pub fn with_transport(config: ClientConfig, transport: T, out: W) -> Self {
        Self {
            config,
            transport,
            out,
            next_id: 1,
        }
    }

    /// Id the next request will carry.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Where requests, responses and diagnostics are printed.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mutable access to the output, for callers printing alongside.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Send a request, returning transport failures as errors.
    ///
    /// An `error` member in the response is printed but is not an error here;
    /// the response is returned as received.
    pub fn try_send(
        &mut self,
        method: &str,
        params: Option<Map<String, JsonValue>>,
    ) -> Result<JsonValue> {
        let request = JsonRpcRequest::new(self.next_id, method, params);
        self.next_id += 1;

        let url = self.config.endpoint_url();
        let body = serde_json::to_string(&request)?;
        tracing::debug!(id = %request.id, method, url = %url, "sending request");

        let pretty = pretty_json(&request);
        self.print(format_args!("\nSending request to {}:\n{}\n", url, pretty));

        let response = self.transport.post_json(&url, body)?;
        self.print(format_args!(
            "\nReceived response:\n{}\n",
            pretty_json(&response)
        ));

        if let Some(err) = response_error(&response) {
            tracing::debug!(id = %request.id, code = ?err.code, "server returned an error");
            self.print(format_args!("\nError: {}\n", err));
        }

        Ok(response)
    }

    /// Send a request, printing any transport failure.
    ///
    /// Returns `None` when no response was received.
    pub fn send_request(
        &mut self,
        method: &str,
        params: Option<Map<String, JsonValue>>,
    ) -> Option<JsonValue> {
        match self.try_send(method, params) {
            Ok(response) => Some(response),
            Err(err) => {
                tracing::warn!(method, error = %err, "request failed");
                self.print(format_args!(
                    "\nError communicating with MCP server: {}\n",
                    err
                ));
                None
            }
        }
    }

    /// List the server's tools.
    pub fn list_tools(&mut self) -> Option<JsonValue> {
        self.send_request(tools::LIST_TOOLS_METHOD, None)
    }

    /// Call a named tool with the given arguments.
    pub fn call_tool(&mut self, name: &str, arguments: JsonValue) -> Option<JsonValue> {
        let params = tools::call_tool_params(name, arguments);
        self.send_request(tools::CALL_TOOL_METHOD, Some(params))
    }

    /// Call the search tool.
    pub fn call_search_tool(&mut self, search: &SearchRequest) -> Option<JsonValue> {
        self.call_tool(tools::search::TOOL_NAME, search.arguments())
    }

    /// Call the chat tool.
    pub fn call_chat_tool(&mut self, chat: &ChatRequest) -> Option<JsonValue> {
        self.call_tool(tools::chat::TOOL_NAME, chat.arguments())
    }

    /// Query the server's health endpoint.
    ///
    /// Not a JSON-RPC call, so the request counter is left alone.
    pub fn health(&mut self) -> Option<JsonValue> {
        let url = self.config.health_url();
        self.print(format_args!("\nChecking health at {}\n", url));

        match self.transport.get_json(&url) {
            Ok(response) => {
                self.print(format_args!(
                    "\nReceived response:\n{}\n",
                    pretty_json(&response)
                ));
                Some(response)
            }
            Err(err) => {
                tracing::warn!(error = %err, "health check failed");
                self.print(format_args!(
                    "\nError communicating with MCP server: {}\n",
                    err
                ));
                None
            }
        }
    }

    fn print(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write output");
        }
    }
}

fn pretty_json<S: serde::Serialize>(value: &S) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
