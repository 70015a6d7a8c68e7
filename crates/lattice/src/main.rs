//! LatticeAI - command-line client
//!
//! Main entry point for the Lattice CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{agents, chat, config, connections, models, prompts, tools, version};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// LatticeAI - CLI for the LatticeAI server API
#[derive(Parser)]
#[command(name = "lattice")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON responses
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage LLM connections
    Connections(connections::ConnectionsArgs),

    /// Manage prompts
    Prompts(prompts::PromptsArgs),

    /// Manage models
    Models(models::ModelsArgs),

    /// Manage tools
    Tools(tools::ToolsArgs),

    /// Manage agents
    Agents(agents::AgentsArgs),

    /// Ask a question to the LatticeAI (interactive chat)
    Chat(chat::ChatArgs),

    /// Configure the LatticeAI CLI
    Config(config::ConfigArgs),

    /// Show the version of the LatticeAI CLI
    Version,
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Console layer on stderr plus a daily rolling JSON file
    let filter = if cli.verbose {
        "lattice=debug,lattice_client=debug,lattice_config=debug,warn"
    } else {
        "warn"
    };

    let log_dir = lattice_config::log_dir().unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "lattice.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "lattice=trace,lattice_client=trace,lattice_config=trace,info",
                )),
        )
        .init();

    let ctx = commands::Context {
        verbose: cli.verbose,
        pretty: cli.pretty,
    };

    // Dispatch to command handlers
    match cli.command {
        Commands::Connections(args) => connections::run(args, &ctx).await,
        Commands::Prompts(args) => prompts::run(args, &ctx).await,
        Commands::Models(args) => models::run(args, &ctx).await,
        Commands::Tools(args) => tools::run(args, &ctx).await,
        Commands::Agents(args) => agents::run(args, &ctx).await,
        Commands::Chat(args) => chat::run(args, &ctx).await,
        Commands::Config(args) => config::run(args, &ctx).await,
        Commands::Version => version::run(),
    }
}
