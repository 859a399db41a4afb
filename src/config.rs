//! Client configuration.
//!
//! Everything comes from command-line flags; there are no config files.

/// Default MCP server base URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:3000";

/// Default MCP endpoint path.
pub const DEFAULT_ENDPOINT: &str = "/mcp";

/// Where the MCP server lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the server, e.g. `http://localhost:3000`
    pub server_url: String,
    /// Path of the JSON-RPC endpoint, e.g. `/mcp`
    pub endpoint: String,
}

impl ClientConfig {
    /// Create a config for the given server and endpoint.
    ///
    /// A server given as bare `host:port` gets `http://` prepended.
    pub fn new(server_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        let server_url = server_url.into();
        let server_url = if server_url.starts_with("http://") || server_url.starts_with("https://")
        {
            server_url
        } else {
            format!("http://{}", server_url)
        };

        Self {
            server_url,
            endpoint: endpoint.into(),
        }
    }

    /// Full URL that JSON-RPC requests are posted to.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.server_url, self.endpoint)
    }

    /// URL of the server's health check.
    pub fn health_url(&self) -> String {
        format!("{}/health", self.server_url.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL, DEFAULT_ENDPOINT)
    }
}
