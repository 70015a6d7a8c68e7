//! Version command.

use anyhow::Result;

/// Print the CLI version.
pub fn run() -> Result<()> {
    println!("LatticeAI CLI version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
