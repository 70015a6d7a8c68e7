//! Interactive chat session.
//!
//! A session owns one [`Conversation`] and replays all of it to the `chat`
//! endpoint on every turn. Nothing inside the loop is fatal: transport,
//! parse and shape failures are reported and the loop prompts again.

use std::io::{BufRead, Write};

use anyhow::Result;
use console::{Style, style};
use lattice_client::{ChatRequest, Conversation, LatticeClient, Role, reply_content};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config, Editor};
use thiserror::Error;

/// Input that ends the session.
pub const EXIT_SENTINEL: &str = "exit";

/// Per-turn prompt.
pub const PROMPT: &str = "> ";

/// Consecutive input read failures after which the session gives up.
const MAX_READ_FAILURES: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// A source of input lines.
pub trait LineSource {
    /// Show `prompt` and read one line. `None` means end of input or an
    /// interrupt.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for Box<T> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// Line editor input for interactive terminals.
pub struct EditorInput {
    editor: Editor<(), DefaultHistory>,
}

impl EditorInput {
    pub fn new() -> Result<Self> {
        let config = Config::builder()
            .history_ignore_space(true)
            .auto_add_history(true)
            .build();

        Ok(Self {
            editor: Editor::with_config(config)?,
        })
    }
}

impl LineSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            // Ctrl+C and Ctrl+D both end the session
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!();
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered input, for piped stdin.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected.
pub struct ReaderInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> ReaderInput<R, W> {
    /// Read lines from `reader`, echoing prompts to `prompt_out`.
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl<R: BufRead, W: Write> LineSource for ReaderInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────────────────

/// Where the session loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    AwaitingResponse,
    Terminated,
}

/// Why a turn produced no assistant reply.
#[derive(Debug, Error)]
pub enum TurnError {
    /// The request could not be exchanged.
    #[error("Error: {0}")]
    Transport(#[from] lattice_client::Error),

    /// The reply body is not JSON.
    #[error("Error parsing response: {0}")]
    Parse(#[source] serde_json::Error),

    /// The reply is JSON without a string `message.content`. Holds the raw
    /// body.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// One interactive chat session.
pub struct ChatSession<I, W> {
    client: LatticeClient,
    tag: String,
    model: String,
    conversation: Conversation,
    input: I,
    out: W,
    state: SessionState,
}

impl<I: LineSource, W: Write> ChatSession<I, W> {
    /// Create a session for the given agent tag and model.
    pub fn new(
        client: LatticeClient,
        tag: impl Into<String>,
        model: impl Into<String>,
        input: I,
        out: W,
    ) -> Self {
        Self {
            client,
            tag: tag.into(),
            model: model.into(),
            conversation: Conversation::new(),
            input,
            out,
            state: SessionState::AwaitingInput,
        }
    }

    /// The history accumulated so far.
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run turns until `exit`, end of input or an interrupt.
    ///
    /// A line that cannot be read is reported and skipped; only a stream that
    /// keeps failing ends the session.
    pub async fn run(&mut self) -> Result<()> {
        let mut read_failures = 0;
        loop {
            self.state = SessionState::AwaitingInput;
            let line = match self.input.read_line(PROMPT) {
                Ok(Some(line)) => {
                    read_failures = 0;
                    line
                }
                Ok(None) => break,
                Err(e) => {
                    read_failures += 1;
                    tracing::debug!(error = %e, read_failures, "failed to read input");
                    let red = Style::new().red();
                    writeln!(self.out, "{}", red.apply_to(format!("Error reading input: {}", e)))?;
                    if read_failures >= MAX_READ_FAILURES {
                        break;
                    }
                    continue;
                }
            };

            let line = line.trim();
            if line == EXIT_SENTINEL {
                break;
            }

            self.state = SessionState::AwaitingResponse;
            match self.turn(line).await {
                Ok(reply) => {
                    writeln!(self.out, "{} {}", style("Assistant:").bold().cyan(), reply)?;
                }
                Err(e) => {
                    tracing::debug!(error = %e, turn = self.conversation.len(), "chat turn failed");
                    let red = Style::new().red();
                    writeln!(self.out, "{}", red.apply_to(&e))?;
                    if let TurnError::Transport(err) = &e
                        && err.is_connect()
                    {
                        let dim = Style::new().dim();
                        writeln!(
                            self.out,
                            "{}",
                            dim.apply_to("Could not reach the server; check `lattice config show`.")
                        )?;
                    }
                }
            }
        }

        self.state = SessionState::Terminated;
        tracing::debug!(messages = self.conversation.len(), "chat session ended");
        Ok(())
    }

    /// Send one user message and record the reply.
    ///
    /// The user message stays in the history even when the turn fails.
    pub async fn turn(&mut self, content: &str) -> Result<String, TurnError> {
        self.conversation.append(Role::User, content, None);

        let request = ChatRequest::new(
            self.tag.as_str(),
            self.model.as_str(),
            self.conversation.snapshot(),
        );
        let body = self.client.chat().send(&request).await?;

        let value: serde_json::Value = serde_json::from_slice(&body).map_err(TurnError::Parse)?;
        let Some(reply) = reply_content(&value) else {
            return Err(TurnError::UnexpectedResponse(
                String::from_utf8_lossy(&body).into_owned(),
            ));
        };

        let reply = reply.to_string();
        self.conversation.append(Role::Assistant, reply.as_str(), None);
        Ok(reply)
    }
}
