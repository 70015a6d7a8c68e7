//! Chat command - interactive conversation with an agent.

use std::io::IsTerminal;

use anyhow::Result;
use clap::Args;
use console::{Style, style};

use super::Context;
use super::repl::{ChatSession, EditorInput, LineSource, ReaderInput};

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {}

/// Run the chat command.
pub async fn run(_args: ChatArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let mut input: Box<dyn LineSource> = if std::io::stdin().is_terminal() {
        Box::new(EditorInput::new()?)
    } else {
        Box::new(ReaderInput::new(std::io::stdin().lock(), std::io::stdout()))
    };

    let Some((tag, model)) = read_session_params(&mut input)? else {
        return Ok(());
    };
    tracing::debug!(%tag, %model, "starting chat session");

    print_welcome(&tag, &model);

    let mut session = ChatSession::new(client, tag, model, input, std::io::stdout());
    session.run().await
}

/// Ask for the agent tag and model. `None` if input ends first.
pub fn read_session_params<I: LineSource + ?Sized>(
    input: &mut I,
) -> Result<Option<(String, String)>> {
    let Some(tag) = input.read_line("Agent tag: ")? else {
        return Ok(None);
    };
    let Some(model) = input.read_line("LLM model: ")? else {
        return Ok(None);
    };
    Ok(Some((tag.trim().to_string(), model.trim().to_string())))
}

fn print_welcome(tag: &str, model: &str) {
    let dim = Style::new().dim();
    println!();
    println!("{}", style("Lattice Chat").bold().cyan());
    println!("{}", dim.apply_to(format!("agent: {}  model: {}", tag, model)));
    println!("{}", dim.apply_to("─".repeat(40)));
    println!("Enter your messages. Type 'exit' to quit.");
    println!();
}
