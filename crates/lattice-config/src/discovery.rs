//! Config directory discovery.
//!
//! Resolution order:
//! 1. `LATTICE_CONFIG_DIR` (when set and non-empty)
//! 2. `~/.Lattice/client`

use std::path::PathBuf;

/// Environment variable to override the config directory.
///
/// Useful for testing and for keeping several server setups side by side.
const CONFIG_DIR_ENV: &str = "LATTICE_CONFIG_DIR";

/// Top-level dot directory under the user's home.
const APP_DIR: &str = ".Lattice";

/// Sub-directory holding client state.
const CLIENT_DIR: &str = "client";

/// Config filename within the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Get the config directory for the client.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::home_dir().map(|home| home.join(APP_DIR).join(CLIENT_DIR))
}

/// Get the path of the client config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Directory for rolling log files.
pub fn log_dir() -> Option<PathBuf> {
    config_dir().map(|d| d.join("logs"))
}
