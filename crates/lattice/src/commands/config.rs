//! Config command - configuration management.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::Style;

use lattice_config::{self, ClientConfig, DEFAULT_BASE_URL};

use super::{Context, value_or_prompt};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Configure the LatticeAI server (prompts for missing values)
    Server {
        /// API key for LatticeAI
        #[arg(long)]
        api_key: Option<String>,

        /// API URL for the LatticeAI server
        #[arg(long)]
        url: Option<String>,
    },

    /// Show resolved configuration and where each value comes from
    Show,

    /// Show configuration file path
    Path,
}

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Server { api_key, url } => cmd_server(api_key, url),
        ConfigCommand::Show => cmd_show(ctx),
        ConfigCommand::Path => cmd_path(),
    }
}

fn cmd_server(api_key: Option<String>, url: Option<String>) -> Result<()> {
    let api_key = value_or_prompt(api_key, "Enter API key (default: none): ")?;
    let url = value_or_prompt(url, &format!("Enter API URL (default: {}): ", DEFAULT_BASE_URL))?;
    let url = if url.is_empty() {
        DEFAULT_BASE_URL.to_string()
    } else {
        url
    };

    // Fail before writing anything the resolver would later reject
    let url = lattice_config::parse_base_url(&url)?;

    let config = ClientConfig {
        api_key: (!api_key.is_empty()).then_some(api_key),
        url: Some(url.to_string()),
    };
    let path = lattice_config::save_client_config(&config)?;
    tracing::info!(path = %path.display(), "saved client config");

    let green = Style::new().green();
    println!("{} Configuration set:", green.apply_to("✓"));
    println!("  API Key: {}", mask_key(config.api_key()));
    println!("  API URL: {}", url);
    println!("Config saved to: {}", path.display());
    Ok(())
}

fn cmd_show(ctx: &Context) -> Result<()> {
    let resolved = lattice_config::resolve()?;
    let dim = Style::new().dim();

    println!("# LatticeAI CLI Configuration\n");

    match lattice_config::config_path() {
        Some(path) if path.exists() => println!("Config file: {}", path.display()),
        Some(path) => println!(
            "Config file: {} {}",
            path.display(),
            dim.apply_to("(not found, using defaults)")
        ),
        None => println!("Config file: {}", dim.apply_to("(no config directory)")),
    }
    println!();

    println!(
        "  API URL: {}  {}",
        resolved.base_url,
        dim.apply_to(format!("({})", resolved.base_url_source))
    );
    match (&resolved.api_key, &resolved.api_key_source) {
        (Some(key), Some(source)) => println!(
            "  API Key: {}  {}",
            mask_key(Some(key.as_str())),
            dim.apply_to(format!("({})", source))
        ),
        _ => println!("  API Key: {}", dim.apply_to("(none)")),
    }

    if ctx.verbose {
        let mut config = lattice_config::load_client_config()?;
        config.api_key = config.api_key().map(|key| mask_key(Some(key)));
        println!("\n---\nRaw config:\n");
        println!("{}", config.to_toml()?);
    }

    Ok(())
}

fn cmd_path() -> Result<()> {
    if let Some(path) = lattice_config::config_path() {
        println!("{}", path.display());
    } else {
        eprintln!("Could not determine config directory");
    }
    Ok(())
}

/// Mask an API key for display, keeping a short prefix.
pub fn mask_key(key: Option<&str>) -> String {
    match key {
        None | Some("") => "(none)".to_string(),
        Some(key) if key.chars().count() <= 8 => "*".repeat(8),
        Some(key) => {
            let prefix: String = key.chars().take(4).collect();
            format!("{}{}", prefix, "*".repeat(8))
        }
    }
}
