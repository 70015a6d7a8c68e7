//! Connections command - manage LLM backend connections.

use anyhow::Result;
use clap::{Args, Subcommand};
use lattice_client::{CreateConnectionRequest, DEFAULT_CONNECTION_SOURCE};

use super::{Context, value_or_prompt};

/// Arguments for the connections command.
#[derive(Args, Debug)]
pub struct ConnectionsArgs {
    #[command(subcommand)]
    pub command: ConnectionsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConnectionsCommand {
    /// List all connections
    List,

    /// Get a connection
    Get {
        /// Connection ID
        id: String,
    },

    /// Delete a connection
    Delete {
        /// Connection ID
        id: String,
    },

    /// Create a new connection (prompts for missing fields)
    Create {
        /// Connection ID
        #[arg(long)]
        id: Option<String>,

        /// Backend kind
        #[arg(long)]
        source: Option<String>,

        /// Backend URL
        #[arg(long)]
        url: Option<String>,

        /// Backend API key
        #[arg(long)]
        api_key: Option<String>,
    },
}

/// Run the connections command.
pub async fn run(args: ConnectionsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let body = match args.command {
        ConnectionsCommand::List => client.connections().list().await?,
        ConnectionsCommand::Get { id } => client.connections().get(&id).await?,
        ConnectionsCommand::Delete { id } => client.connections().delete(&id).await?,
        ConnectionsCommand::Create {
            id,
            source,
            url,
            api_key,
        } => {
            let id = value_or_prompt(id, "Connection ID: ")?;
            let source = value_or_prompt(
                source,
                &format!("Source (default: {}): ", DEFAULT_CONNECTION_SOURCE),
            )?;
            let url = value_or_prompt(url, "URL: ")?;
            let api_key = value_or_prompt(api_key, "API Key (optional): ")?;

            let request = CreateConnectionRequest::new(id, source, url, api_key);
            tracing::debug!(id = %request.id, source = %request.source, "creating connection");
            client.connections().create(&request).await?
        }
    };

    ctx.print_body(&body);
    Ok(())
}
