//! Interactive text menu.
//!
//! Reads one answer per line from any `BufRead` and prints prompts to the
//! client's own output, so the transcript reads top to bottom.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::client::{McpClient, Transport};
use crate::error::Result;
use crate::session::ChatSession;
use crate::tools::{search, tool_list, ChatRequest, SearchRequest};

const DOCUMENT_SETS_PROMPT: &str = "Document sets (comma-separated, leave empty for all): ";

/// Why a menu action stopped early.
enum Stop {
    /// Input ran out.
    Eof,
    Io(io::Error),
}

impl From<io::Error> for Stop {
    fn from(err: io::Error) -> Self {
        Stop::Io(err)
    }
}

type Step<T> = std::result::Result<T, Stop>;

/// Run the menu until the user quits or input ends.
pub fn run<T, W, R>(client: &mut McpClient<T, W>, input: R) -> Result<()>
where
    T: Transport,
    W: Write,
    R: BufRead,
{
    let mut menu = Menu {
        client,
        input,
        session: ChatSession::new(),
    };

    match menu.run() {
        Ok(()) | Err(Stop::Eof) => Ok(()),
        Err(Stop::Io(e)) => Err(e.into()),
    }
}

struct Menu<'a, T, W, R> {
    client: &'a mut McpClient<T, W>,
    input: R,
    session: ChatSession,
}

impl<T: Transport, W: Write, R: BufRead> Menu<'_, T, W, R> {
    fn run(&mut self) -> Step<()> {
        self.say(format_args!(
            "\nMCP Test Client - Interactive Mode\n\
             ==================================\n\
             Enter 'exit' or 'quit' to exit.\n"
        ))?;

        loop {
            self.say(format_args!(
                "\nOptions:\n\
                 1) List available tools\n\
                 2) Search Onyx\n\
                 3) Chat with Onyx\n\
                 q) Quit\n"
            ))?;

            let choice = self.prompt("\nEnter choice: ")?;
            match choice.trim().to_lowercase().as_str() {
                "q" | "quit" | "exit" => return Ok(()),
                "1" => self.list_tools()?,
                "2" => self.search()?,
                "3" => self.chat()?,
                _ => self.say(format_args!("Unknown option.\n"))?,
            }
        }
    }

    fn list_tools(&mut self) -> Step<()> {
        let Some(response) = self.client.list_tools() else {
            return Ok(());
        };

        let names: Vec<String> = tool_list(&response).into_iter().map(|t| t.name).collect();
        if !names.is_empty() {
            self.say(format_args!("\nAvailable tools: {}\n", names.join(", ")))?;
        }
        Ok(())
    }

    fn search(&mut self) -> Step<()> {
        let query = self.prompt_query("Enter search query: ")?;

        let max_results = self.prompt(&format!(
            "Max results [{}]: ",
            search::DEFAULT_MAX_RESULTS
        ))?;
        let max_results = match parse_number::<u32>(&max_results) {
            None => search::DEFAULT_MAX_RESULTS,
            Some(Ok(n)) => n,
            Some(Err(_)) => {
                self.say(format_args!(
                    "Invalid number '{}', using {}.\n",
                    max_results.trim(),
                    search::DEFAULT_MAX_RESULTS
                ))?;
                search::DEFAULT_MAX_RESULTS
            }
        };

        let retrieve_full = self.prompt("Retrieve full documents? (y/n) [n]: ")?;
        let document_sets = self.prompt(DOCUMENT_SETS_PROMPT)?;

        let request = SearchRequest::new(query)
            .max_results(max_results)
            .retrieve_full_documents(retrieve_full.trim().eq_ignore_ascii_case("y"))
            .document_sets(parse_document_sets(&document_sets));
        self.client.call_search_tool(&request);
        Ok(())
    }

    fn chat(&mut self) -> Step<()> {
        let query = self.prompt_query("Enter chat query: ")?;

        if self.session.id().is_some() {
            let answer = self.prompt("Continue existing chat session? (y/n) [y]: ")?;
            if answer.trim().eq_ignore_ascii_case("n") {
                self.session.clear();
            }
        }

        let persona = self.prompt("Persona ID (leave empty for default): ")?;
        let persona_id = match parse_number::<i64>(&persona) {
            None => None,
            Some(Ok(id)) => Some(id),
            Some(Err(_)) => {
                self.say(format_args!(
                    "Invalid persona ID '{}', using default.\n",
                    persona.trim()
                ))?;
                None
            }
        };

        let document_sets = self.prompt(DOCUMENT_SETS_PROMPT)?;

        let request = ChatRequest::new(query)
            .persona_id(persona_id)
            .chat_session_id(self.session.id().map(str::to_string))
            .document_sets(parse_document_sets(&document_sets));

        let Some(response) = self.client.call_chat_tool(&request) else {
            return Ok(());
        };
        if let Some(id) = self.session.update_from(&response).map(str::to_string) {
            self.say(format_args!("\nChat session ID: {}\n", id))?;
        }
        Ok(())
    }

    /// Prompt until a non-blank answer comes back.
    fn prompt_query(&mut self, label: &str) -> Step<String> {
        loop {
            let answer = self.prompt(label)?;
            let answer = answer.trim();
            if !answer.is_empty() {
                return Ok(answer.to_string());
            }
            self.say(format_args!("Query cannot be empty.\n"))?;
        }
    }

    /// Print a label and read one line, without its line ending.
    fn prompt(&mut self, label: &str) -> Step<String> {
        self.say(format_args!("{}", label))?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Stop::Eof);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn say(&mut self, args: fmt::Arguments<'_>) -> Step<()> {
        let out = self.client.output_mut();
        out.write_fmt(args)?;
        out.flush()?;
        Ok(())
    }
}

/// Parse a numeric answer. `None` means the answer was blank.
fn parse_number<N: FromStr>(input: &str) -> Option<std::result::Result<N, N::Err>> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        Some(input.parse())
    }
}

/// Split a comma-separated answer into document set names.
fn parse_document_sets(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
