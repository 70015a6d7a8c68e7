//! Tools command - manage tools and inspect tool functions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use lattice_client::CreateToolRequest;

use super::{Context, read_json_file, value_or_prompt};

/// Arguments for the tools command.
#[derive(Args, Debug)]
pub struct ToolsArgs {
    #[command(subcommand)]
    pub command: ToolsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ToolsCommand {
    /// List all tools
    List,

    /// Get a tool
    Get {
        /// Tool ID
        id: String,
    },

    /// Delete a tool
    Delete {
        /// Tool ID
        id: String,
    },

    /// Get functions of a tool
    GetFunction {
        /// Tool ID
        id: String,
    },

    /// List all tool functions
    ListFunctions {
        /// Include all functions
        #[arg(long)]
        allfunctions: bool,
    },

    /// Create a new tool
    Create {
        /// Tool ID
        #[arg(long)]
        id: Option<String>,

        /// Tool description
        #[arg(long)]
        description: Option<String>,

        /// Path to the tool list JSON file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Run the tools command.
pub async fn run(args: ToolsArgs, ctx: &Context) -> Result<()> {
    // Nothing is sent without the flag, so don't require a usable config
    if let ToolsCommand::ListFunctions { allfunctions: false } = args.command {
        println!("Use --allfunctions to list all tool functions.");
        return Ok(());
    }

    let client = ctx.client()?;

    let body = match args.command {
        ToolsCommand::List => client.tools().list().await?,
        ToolsCommand::Get { id } => client.tools().get(&id).await?,
        ToolsCommand::Delete { id } => client.tools().delete(&id).await?,
        ToolsCommand::GetFunction { id } => client.tools().function(&id).await?,
        ToolsCommand::ListFunctions { .. } => client.tools().functions().await?,
        ToolsCommand::Create {
            id,
            description,
            file,
        } => {
            let id = value_or_prompt(id, "Tool ID: ")?;
            let description = value_or_prompt(description, "Description (optional): ")?;
            let path = match file {
                Some(path) => path,
                None => PathBuf::from(super::prompt("Path to tool list JSON file: ")?),
            };
            let toollist = read_json_file(&path)?;

            let request = CreateToolRequest {
                id,
                description,
                toollist,
            };
            client.tools().create(&request).await?
        }
    };

    ctx.print_body(&body);
    Ok(())
}
