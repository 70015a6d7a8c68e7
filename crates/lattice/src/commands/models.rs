//! Models command - list and inspect models.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;

/// Arguments for the models command.
#[derive(Args, Debug)]
pub struct ModelsArgs {
    #[command(subcommand)]
    pub command: ModelsCommand,
}

#[derive(Subcommand, Debug)]
pub enum ModelsCommand {
    /// List all models
    List,

    /// Get a model
    Get {
        /// Model ID
        id: String,
    },
}

/// Run the models command.
pub async fn run(args: ModelsArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let body = match args.command {
        ModelsCommand::List => client.models().list().await?,
        ModelsCommand::Get { id } => client.models().get(&id).await?,
    };

    ctx.print_body(&body);
    Ok(())
}
