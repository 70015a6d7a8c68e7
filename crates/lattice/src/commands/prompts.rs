//! Prompts command - manage system prompts.

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use lattice_client::CreatePromptRequest;

use super::{Context, read_until_blank, value_or_prompt};

/// Arguments for the prompts command.
#[derive(Args, Debug)]
pub struct PromptsArgs {
    #[command(subcommand)]
    pub command: PromptsCommand,
}

#[derive(Subcommand, Debug)]
pub enum PromptsCommand {
    /// List all prompts
    List,

    /// Get a prompt
    Get {
        /// Prompt ID
        id: String,
    },

    /// Delete a prompt
    Delete {
        /// Prompt ID
        id: String,
    },

    /// Create a new prompt
    Create {
        /// Prompt ID
        #[arg(long)]
        id: Option<String>,

        /// Read the prompt text from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Run the prompts command.
pub async fn run(args: PromptsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let body = match args.command {
        PromptsCommand::List => client.prompts().list().await?,
        PromptsCommand::Get { id } => client.prompts().get(&id).await?,
        PromptsCommand::Delete { id } => client.prompts().delete(&id).await?,
        PromptsCommand::Create { id, file } => {
            let id = value_or_prompt(id, "Prompt ID: ")?;
            let prompt = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Error reading prompt file {}", path.display()))?,
                None => {
                    println!("Enter prompt text (end with an empty line):");
                    read_until_blank(&mut std::io::stdin().lock())?
                }
            };

            client
                .prompts()
                .create(&CreatePromptRequest { id, prompt })
                .await?
        }
    };

    ctx.print_body(&body);
    Ok(())
}
