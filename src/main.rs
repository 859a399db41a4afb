//! Test client for the Onyx MCP server.
//!
//! Run with `onyx-mcp-client list-tools`, `onyx-mcp-client search <query>`, or
//! with no command for interactive mode.

use clap::{Parser, Subcommand};
use serde_json::Value as JsonValue;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use onyx_mcp_client::{
    interactive, response_error, ChatRequest, ClientConfig, McpClient, SearchRequest,
    DEFAULT_ENDPOINT, DEFAULT_SERVER_URL,
};

/// MCP test client.
///
/// Sends JSON-RPC 2.0 requests to an MCP server over HTTP and prints
/// each request and response.
#[derive(Parser)]
#[command(name = "onyx-mcp-client")]
#[command(version, about, long_about = None)]
struct Args {
    /// MCP server URL.
    #[arg(long, global = true, value_name = "URL", default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// MCP endpoint path.
    #[arg(long, global = true, value_name = "PATH", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Enable debug logging to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List available tools
    ListTools,

    /// Search Onyx
    Search {
        /// Search query
        query: String,

        /// Maximum number of results
        #[arg(long, default_value_t = 5)]
        max_results: u32,

        /// Number of chunks to include above matches
        #[arg(long, default_value_t = 1)]
        chunks_above: u32,

        /// Number of chunks to include below matches
        #[arg(long, default_value_t = 1)]
        chunks_below: u32,

        /// Retrieve full documents
        #[arg(long)]
        retrieve_full: bool,

        /// Document sets to search
        #[arg(long, num_args = 1.., value_name = "SET")]
        document_sets: Vec<String>,
    },

    /// Chat with Onyx
    Chat {
        /// Chat query/question
        query: String,

        /// Persona ID
        #[arg(long)]
        persona_id: Option<i64>,

        /// Chat session ID for continuing a conversation
        #[arg(long)]
        session_id: Option<String>,

        /// Document sets to use
        #[arg(long, num_args = 1.., value_name = "SET")]
        document_sets: Vec<String>,
    },

    /// Check the server's health endpoint
    Health,

    /// Interactive menu (the default)
    Interactive,
}

fn main() {
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(
                    "onyx_mcp_client=debug"
                        .parse()
                        .unwrap_or_else(|_| LevelFilter::DEBUG.into()),
                ),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    let config = ClientConfig::new(args.server, args.endpoint);
    let mut client = match McpClient::connect(config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error: Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let response = match args.command {
        None | Some(Command::Interactive) => {
            let stdin = std::io::stdin();
            if let Err(e) = interactive::run(&mut client, stdin.lock()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
            return;
        }
        Some(Command::ListTools) => client.list_tools(),
        Some(Command::Search {
            query,
            max_results,
            chunks_above,
            chunks_below,
            retrieve_full,
            document_sets,
        }) => {
            let search = SearchRequest::new(query)
                .max_results(max_results)
                .chunks(chunks_above, chunks_below)
                .retrieve_full_documents(retrieve_full)
                .document_sets(document_sets);
            client.call_search_tool(&search)
        }
        Some(Command::Chat {
            query,
            persona_id,
            session_id,
            document_sets,
        }) => {
            let chat = ChatRequest::new(query)
                .persona_id(persona_id)
                .chat_session_id(session_id)
                .document_sets(document_sets);
            client.call_chat_tool(&chat)
        }
        Some(Command::Health) => client.health(),
    };

    std::process::exit(exit_code(response.as_ref()));
}

/// 0 for a clean response, 1 when nothing came back or the server reported an error.
fn exit_code(response: Option<&JsonValue>) -> i32 {
    match response {
        Some(r) if response_error(r).is_none() => 0,
        _ => 1,
    }
}
