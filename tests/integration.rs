//! Integration tests for the MCP client over real HTTP.
//!
//! A small blocking server on a loopback port plays the MCP server.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use onyx_mcp_client::{ChatRequest, ClientConfig, HttpTransport, McpClient, SearchRequest};
use serde_json::{json, Value as JsonValue};

/// One request as the mock server saw it.
#[derive(Debug)]
struct Recorded {
    method: String,
    path: String,
    content_type: Option<String>,
    body: String,
}

impl Recorded {
    fn json(&self) -> JsonValue {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

struct MockServer {
    port: u16,
    requests: mpsc::Receiver<Recorded>,
}

impl MockServer {
    /// Serve every connection with `handler`, which returns status and body.
    fn start<F>(handler: F) -> Self
    where
        F: Fn(&Recorded) -> (u16, String) + Send + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let port = listener.local_addr().expect("No local addr").port();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                let Some(request) = read_request(&mut stream) else {
                    continue;
                };
                let (status, body) = handler(&request);
                write_response(&mut stream, status, &body);
                if tx.send(request).is_err() {
                    break;
                }
            }
        });

        Self { port, requests: rx }
    }

    /// Serve the same JSON body with 200 to every request.
    fn replying(body: JsonValue) -> Self {
        let body = body.to_string();
        Self::start(move |_| (200, body.clone()))
    }

    fn config(&self) -> ClientConfig {
        ClientConfig::new(format!("http://127.0.0.1:{}", self.port), "/mcp")
    }

    fn next_request(&self) -> Recorded {
        self.requests
            .recv_timeout(Duration::from_secs(5))
            .expect("server saw no request")
    }
}

fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let mut headers = [httparse::EMPTY_HEADER; 32];
    let mut req = httparse::Request::new(&mut headers);
    req.parse(&buf[..header_end]).ok()?;

    let header = |name: &str| {
        req.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| String::from_utf8_lossy(h.value).into_owned())
    };
    let content_type = header("content-type");
    let content_length: usize = header("content-length")
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(0);
    let method = req.method?.to_string();
    let path = req.path?.to_string();

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Some(Recorded {
        method,
        path,
        content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

fn write_response(stream: &mut TcpStream, status: u16, body: &str) {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        500 => "Internal Server Error",
        _ => "Unknown",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

fn http_client(config: ClientConfig) -> McpClient<HttpTransport, Vec<u8>> {
    let transport = HttpTransport::new().expect("Failed to create transport");
    McpClient::with_transport(config, transport, Vec::new())
}

fn output(client: &McpClient<HttpTransport, Vec<u8>>) -> String {
    String::from_utf8_lossy(client.output()).into_owned()
}

// =============================================================================
// Request envelope
// =============================================================================

#[test]
fn test_list_tools_request_on_the_wire() {
    let tools = json!({
        "jsonrpc": "2.0",
        "id": "1",
        "result": {"tools": [{"name": "search_onyx"}, {"name": "chat_with_onyx"}]}
    });
    let server = MockServer::replying(tools.clone());
    let mut client = http_client(server.config());

    let response = client.list_tools();
    assert_eq!(response, Some(tools));

    let request = server.next_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/mcp");
    assert_eq!(request.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        request.body,
        r#"{"jsonrpc":"2.0","id":"1","method":"list_tools","params":{}}"#
    );

    let out = output(&client);
    assert!(out.contains(&format!("Sending request to http://127.0.0.1:{}/mcp:", server.port)));
    assert!(out.contains("Received response:"));
}

#[test]
fn test_ids_increase_across_requests() {
    let server = MockServer::replying(json!({"jsonrpc": "2.0", "result": {}}));
    let mut client = http_client(server.config());

    client.list_tools();
    client.call_search_tool(&SearchRequest::new("one"));
    client.call_chat_tool(&ChatRequest::new("two"));

    let ids: Vec<JsonValue> = (0..3).map(|_| server.next_request().json()["id"].clone()).collect();
    assert_eq!(ids, vec![json!("1"), json!("2"), json!("3")]);
}

#[test]
fn test_custom_endpoint_path() {
    let server = MockServer::replying(json!({"result": {}}));
    let config = ClientConfig::new(format!("127.0.0.1:{}", server.port), "/rpc");
    let mut client = http_client(config);

    assert!(client.list_tools().is_some());
    assert_eq!(server.next_request().path, "/rpc");
}

// =============================================================================
// Tool calls
// =============================================================================

#[test]
fn test_search_tool_call() {
    let server = MockServer::replying(json!({"result": {"content": []}}));
    let mut client = http_client(server.config());

    let search = SearchRequest::new("deploy guide")
        .max_results(3)
        .chunks(2, 0)
        .retrieve_full_documents(true)
        .document_sets(vec!["eng".to_string(), "ops".to_string()]);
    client.call_search_tool(&search);

    let body = server.next_request().json();
    assert_eq!(body["method"], json!("call_tool"));
    assert_eq!(
        body["params"],
        json!({
            "name": "search_onyx",
            "arguments": {
                "query": "deploy guide",
                "maxResults": 3,
                "chunksAbove": 2,
                "chunksBelow": 0,
                "retrieveFullDocuments": true,
                "documentSets": ["eng", "ops"]
            }
        })
    );
}

#[test]
fn test_chat_tool_call_omits_absent_fields() {
    let server = MockServer::replying(json!({"result": {"content": []}}));
    let mut client = http_client(server.config());

    client.call_chat_tool(&ChatRequest::new("hello"));
    client.call_chat_tool(
        &ChatRequest::new("again")
            .persona_id(Some(1))
            .chat_session_id(Some("abc".to_string())),
    );

    assert_eq!(
        server.next_request().json()["params"],
        json!({"name": "chat_with_onyx", "arguments": {"query": "hello"}})
    );
    assert_eq!(
        server.next_request().json()["params"]["arguments"],
        json!({"query": "again", "personaId": 1, "chatSessionId": "abc"})
    );
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_application_error_is_returned() {
    let body = json!({"jsonrpc": "2.0", "id": "1", "error": {"code": -32000, "message": "boom"}});
    let server = MockServer::replying(body.clone());
    let mut client = http_client(server.config());

    let response = client.send_request("call_tool", None);
    assert_eq!(response, Some(body));
    assert!(output(&client).contains("Error: boom"));
}

#[test]
fn test_error_status_yields_none() {
    let server = MockServer::start(|_| {
        (
            400,
            json!({"jsonrpc": "2.0", "id": null, "error": {"code": -32602, "message": "Tool name is required"}})
                .to_string(),
        )
    });
    let mut client = http_client(server.config());

    assert!(client.send_request("call_tool", None).is_none());
    let out = output(&client);
    assert!(out.contains("Error communicating with MCP server"));
    assert!(out.contains("400"));
    assert!(!out.contains("Received response"));
}

#[test]
fn test_invalid_json_yields_none() {
    let server = MockServer::start(|_| (200, "not json".to_string()));
    let mut client = http_client(server.config());

    assert!(client.list_tools().is_none());
    assert!(output(&client).contains("Error communicating with MCP server"));
}

#[test]
fn test_connection_refused_yields_none() {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        listener.local_addr().expect("No local addr").port()
    };
    let mut client = http_client(ClientConfig::new(format!("http://127.0.0.1:{}", port), "/mcp"));

    assert!(client.list_tools().is_none());
    assert!(client.list_tools().is_none());
    assert!(output(&client).contains("Error communicating with MCP server"));
    assert_eq!(client.next_id(), 3);
}

// =============================================================================
// Health
// =============================================================================

#[test]
fn test_health_check() {
    let server = MockServer::replying(json!({"status": "ok"}));
    let mut client = http_client(server.config());

    assert_eq!(client.health(), Some(json!({"status": "ok"})));

    let request = server.next_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/health");
    assert_eq!(client.next_id(), 1);
}
