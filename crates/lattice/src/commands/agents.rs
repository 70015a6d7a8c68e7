//! Agents command - agent management.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;
use lattice_client::CreateAgentRequest;

use super::{Context, read_json_file, value_or_prompt};

/// Arguments for the agents command.
#[derive(Args, Debug)]
pub struct AgentsArgs {
    #[command(subcommand)]
    pub command: AgentsCommand,
}

#[derive(Subcommand, Debug)]
pub enum AgentsCommand {
    /// List all agents
    List,

    /// Get an agent
    Get {
        /// Agent ID
        id: String,
    },

    /// Delete an agent
    Delete {
        /// Agent ID
        id: String,
    },

    /// Create a new agent
    Create {
        /// Agent ID
        #[arg(long)]
        id: Option<String>,

        /// System prompt ID
        #[arg(long)]
        prompt: Option<String>,

        /// Path to the recalltools JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print recalltools JSON before sending
        #[arg(long)]
        printrecall: bool,
    },
}

/// Run the agents command.
pub async fn run(args: AgentsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let body = match args.command {
        AgentsCommand::List => client.agents().list().await?,
        AgentsCommand::Get { id } => client.agents().get(&id).await?,
        AgentsCommand::Delete { id } => client.agents().delete(&id).await?,
        AgentsCommand::Create {
            id,
            prompt,
            file,
            printrecall,
        } => {
            let id = value_or_prompt(id, "Agent ID: ")?;
            let prompt = value_or_prompt(prompt, "Prompt (optional): ")?;
            let path = match file {
                Some(path) => path,
                None => PathBuf::from(super::prompt("Path to recalltools JSON file: ")?),
            };
            let recalltools = read_json_file(&path)?;

            if printrecall {
                println!("{}", style("RecallTools JSON:").bold());
                println!("{}", serde_json::to_string_pretty(&recalltools)?);
            }

            let request = CreateAgentRequest {
                id,
                prompt,
                recalltools,
            };
            client.agents().create(&request).await?
        }
    };

    ctx.print_body(&body);
    Ok(())
}
