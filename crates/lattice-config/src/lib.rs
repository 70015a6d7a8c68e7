//! Configuration for the LatticeAI command-line client.
//!
//! The client needs exactly two values: the server base URL and an optional
//! API key. They are resolved per field, first hit wins:
//!
//! - API key: `LATTICE_API_KEY` → `api_key` in the config file
//! - Base URL: `LATTICE_API_BASE_URL` → `LATTICE_API_URL` → `url` in the
//!   config file → `http://localhost:44444/`
//!
//! The config file lives at `~/.Lattice/client/config.toml` unless
//! `LATTICE_CONFIG_DIR` points somewhere else, and is written by
//! `lattice config server`.

pub mod client;
pub mod discovery;
pub mod error;
pub mod resolver;

pub use client::{
    load_client_config, load_client_config_from, save_client_config, save_client_config_to,
    ClientConfig,
};
pub use discovery::{config_dir, config_path, log_dir};
pub use error::{ConfigError, Result};
pub use resolver::{
    parse_base_url, resolve, resolve_with, ResolvedConfig, ValueSource, DEFAULT_BASE_URL,
};
