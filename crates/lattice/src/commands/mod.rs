//! CLI command handlers.

pub mod agents;
pub mod chat;
pub mod config;
pub mod connections;
pub mod models;
pub mod prompts;
pub mod repl;
pub mod tools;
pub mod version;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context as _, Result};
use lattice_client::LatticeClient;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Verbose output enabled.
    pub verbose: bool,
    /// Pretty-print JSON responses.
    pub pretty: bool,
}

impl Context {
    /// Resolve the configuration and build a client from it.
    pub fn client(&self) -> Result<LatticeClient> {
        let resolved = lattice_config::resolve()?;
        tracing::debug!(
            url = %resolved.base_url,
            source = %resolved.base_url_source,
            api_key = resolved.api_key.is_some(),
            "resolved client configuration"
        );

        let mut builder = LatticeClient::builder().base_url(resolved.base_url.as_str());
        if let Some(key) = resolved.api_key {
            builder = builder.api_key(key);
        }
        Ok(builder.build()?)
    }

    /// Print a response body to stdout.
    pub fn print_body(&self, body: &[u8]) {
        println!("{}", format_body(body, self.pretty));
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Render a response body for display.
///
/// Bodies are shown verbatim unless `pretty` is set and the body is JSON.
pub fn format_body(body: &[u8], pretty: bool) -> String {
    if pretty
        && let Ok(value) = serde_json::from_slice::<serde_json::Value>(body)
        && let Ok(text) = serde_json::to_string_pretty(&value)
    {
        return text;
    }
    String::from_utf8_lossy(body).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Input
// ─────────────────────────────────────────────────────────────────────────────

/// Print `label` and read one trimmed line from `input`.
///
/// End of input yields an empty string.
pub fn prompt_from<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prompt on stdout and read from stdin.
pub fn prompt(label: &str) -> Result<String> {
    prompt_from(&mut io::stdin().lock(), &mut io::stdout(), label)
}

/// Use `value` if given, otherwise prompt for it.
pub fn value_or_prompt(value: Option<String>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt(label),
    }
}

/// Read lines until an empty line or end of input, joined with `\n`.
pub fn read_until_blank<R: BufRead>(input: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Read a file and parse it as JSON.
pub fn read_json_file(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading JSON file {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))
}
