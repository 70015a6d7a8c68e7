//! Persisted client configuration.
//!
//! ```toml
//! api_key = "secret"
//! url = "http://localhost:44444/"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Result};

/// Contents of the client config file.
///
/// Both keys are optional; empty strings are treated as unset during
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API key sent as a bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL of the LatticeAI server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl ClientConfig {
    /// Create a config with both values set.
    pub fn new(api_key: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            url: Some(url.into()),
        }
    }

    /// Parse from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The API key, ignoring empty values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }

    /// The server URL, ignoring empty values.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loading / Saving
// ─────────────────────────────────────────────────────────────────────────────

/// Load the client configuration from the default location.
///
/// Returns an empty config if the file doesn't exist.
pub fn load_client_config() -> Result<ClientConfig> {
    load_client_config_from(crate::config_path().as_deref())
}

/// Load client config from a specific path.
pub fn load_client_config_from(path: Option<&Path>) -> Result<ClientConfig> {
    let Some(path) = path else {
        return Ok(ClientConfig::default());
    };

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no client config file");
        return Ok(ClientConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;

    tracing::debug!(path = %path.display(), "loaded client config");
    ClientConfig::from_toml(&contents)
}

/// Save the client configuration to the default location.
pub fn save_client_config(config: &ClientConfig) -> Result<std::path::PathBuf> {
    let path = crate::config_path().ok_or(ConfigError::NoConfigDir)?;
    save_client_config_to(config, &path)?;
    Ok(path)
}

/// Save client config to a specific path.
///
/// Creates parent directories if they don't exist.
pub fn save_client_config_to(config: &ClientConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteFile {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let contents = config.to_toml()?;
    std::fs::write(path, contents).map_err(|e| ConfigError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_toml() {
        let config = ClientConfig::from_toml(
            r#"
api_key = "secret"
url = "http://lattice.lan:44444/"
"#,
        )
        .unwrap();

        assert_eq!(config.api_key(), Some("secret"));
        assert_eq!(config.url(), Some("http://lattice.lan:44444/"));
    }

    #[test]
    fn test_parse_empty_toml() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = ClientConfig::from_toml("api_key = \"\"\nurl = \"\"\n").unwrap();
        assert!(config.api_key().is_none());
        assert!(config.url().is_none());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let err = ClientConfig::from_toml("api_key = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_values_with_quotes_survive_save() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = ClientConfig::new(r#"ke"y\with"quotes"#, "http://localhost:44444/");
        save_client_config_to(&config, &path).unwrap();

        let loaded = load_client_config_from(Some(&path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".Lattice").join("client").join("config.toml");

        save_client_config_to(&ClientConfig::new("", "http://example.com/"), &path).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let config = load_client_config_from(Some(&path)).unwrap();
        assert_eq!(config, ClientConfig::default());

        let config = load_client_config_from(None).unwrap();
        assert_eq!(config, ClientConfig::default());
    }
}
