//! Resolution of the effective client settings.
//!
//! Environment variables win over the config file, which wins over built-in
//! defaults. Each field is resolved on its own, so an API key from the
//! environment can be combined with a URL from the file.

use std::path::Path;

use url::Url;

use crate::{load_client_config_from, ClientConfig, ConfigError, Result};

/// Server URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:44444/";

/// Environment variable holding the API key.
const API_KEY_ENV: &str = "LATTICE_API_KEY";

/// Environment variables holding the server URL, in precedence order.
///
/// `LATTICE_API_URL` is what older setups exported; it is still honored.
const BASE_URL_ENVS: [&str; 2] = ["LATTICE_API_BASE_URL", "LATTICE_API_URL"];

/// Where a resolved value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Environment variable.
    Env(String),
    /// Client config file.
    File,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::Env(var) => write!(f, "env var {}", var),
            ValueSource::File => write!(f, "config file"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

/// The settings a client is built from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Server base URL, always ending in `/`.
    pub base_url: Url,
    /// Where the base URL came from.
    pub base_url_source: ValueSource,
    /// API key, if any.
    pub api_key: Option<String>,
    /// Where the API key came from (`None` when there is no key).
    pub api_key_source: Option<ValueSource>,
}

/// Resolve settings from the process environment and the default config file.
pub fn resolve() -> Result<ResolvedConfig> {
    let path = crate::config_path();
    resolve_with(|var| std::env::var(var).ok(), path.as_deref())
}

/// Resolve settings with an explicit environment lookup and config file.
pub fn resolve_with<F>(env: F, config_file: Option<&Path>) -> Result<ResolvedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let env = |var: &str| env(var).filter(|v| !v.is_empty());
    let file = load_client_config_from(config_file)?;

    let (api_key, api_key_source) = match env(API_KEY_ENV) {
        Some(key) => (Some(key), Some(ValueSource::Env(API_KEY_ENV.to_string()))),
        None => match file.api_key() {
            Some(key) => (Some(key.to_string()), Some(ValueSource::File)),
            None => (None, None),
        },
    };

    let (raw_url, base_url_source) = BASE_URL_ENVS
        .iter()
        .find_map(|var| env(var).map(|url| (url, ValueSource::Env(var.to_string()))))
        .or_else(|| file_url(&file))
        .unwrap_or_else(|| (DEFAULT_BASE_URL.to_string(), ValueSource::Default));

    let base_url = parse_base_url(&raw_url)?;
    tracing::debug!(%base_url, source = %base_url_source, "resolved server URL");

    Ok(ResolvedConfig {
        base_url,
        base_url_source,
        api_key,
        api_key_source,
    })
}

fn file_url(file: &ClientConfig) -> Option<(String, ValueSource)> {
    file.url().map(|url| (url.to_string(), ValueSource::File))
}

/// Parse a server URL and normalize it to end with `/`.
///
/// Resource paths are joined onto the base, so without the trailing slash
/// the last path segment would be replaced instead of extended.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        source: e,
    })?;
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_env_or_file() {
        let resolved = resolve_with(env_from(&[]), None).unwrap();
        assert_eq!(resolved.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(resolved.base_url_source, ValueSource::Default);
        assert!(resolved.api_key.is_none());
        assert!(resolved.api_key_source.is_none());
    }

    #[test]
    fn test_file_values_used() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "api_key = \"file-key\"\nurl = \"http://file.example:1234/api/lattice/\"\n",
        );

        let resolved = resolve_with(env_from(&[]), Some(&path)).unwrap();
        assert_eq!(resolved.api_key.as_deref(), Some("file-key"));
        assert_eq!(resolved.api_key_source, Some(ValueSource::File));
        assert_eq!(
            resolved.base_url.as_str(),
            "http://file.example:1234/api/lattice/"
        );
        assert_eq!(resolved.base_url_source, ValueSource::File);
    }

    #[test]
    fn test_env_overrides_file_per_field() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            "api_key = \"file-key\"\nurl = \"http://file.example/\"\n",
        );

        let resolved =
            resolve_with(env_from(&[("LATTICE_API_KEY", "env-key")]), Some(&path)).unwrap();
        assert_eq!(resolved.api_key.as_deref(), Some("env-key"));
        assert_eq!(
            resolved.api_key_source,
            Some(ValueSource::Env("LATTICE_API_KEY".to_string()))
        );
        // URL still comes from the file
        assert_eq!(resolved.base_url.as_str(), "http://file.example/");
    }

    #[test]
    fn test_base_url_env_precedence() {
        let resolved = resolve_with(
            env_from(&[
                ("LATTICE_API_BASE_URL", "http://primary.example/"),
                ("LATTICE_API_URL", "http://legacy.example/"),
            ]),
            None,
        )
        .unwrap();
        assert_eq!(resolved.base_url.as_str(), "http://primary.example/");

        let resolved =
            resolve_with(env_from(&[("LATTICE_API_URL", "http://legacy.example/")]), None).unwrap();
        assert_eq!(resolved.base_url.as_str(), "http://legacy.example/");
        assert_eq!(
            resolved.base_url_source,
            ValueSource::Env("LATTICE_API_URL".to_string())
        );
    }

    #[test]
    fn test_empty_env_is_ignored() {
        let resolved = resolve_with(
            env_from(&[("LATTICE_API_KEY", ""), ("LATTICE_API_BASE_URL", "")]),
            None,
        )
        .unwrap();
        assert!(resolved.api_key.is_none());
        assert_eq!(resolved.base_url_source, ValueSource::Default);
    }

    #[test]
    fn test_invalid_url_fails_fast() {
        let err =
            resolve_with(env_from(&[("LATTICE_API_BASE_URL", "not a url")]), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "url = [");
        assert!(resolve_with(env_from(&[]), Some(&path)).is_err());
    }

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("http://localhost:44444/api/lattice").unwrap();
        assert_eq!(url.as_str(), "http://localhost:44444/api/lattice/");

        let url = parse_base_url("http://localhost:44444").unwrap();
        assert_eq!(url.as_str(), "http://localhost:44444/");
    }

    #[test]
    fn test_value_source_display() {
        assert_eq!(
            ValueSource::Env("LATTICE_API_KEY".to_string()).to_string(),
            "env var LATTICE_API_KEY"
        );
        assert_eq!(ValueSource::File.to_string(), "config file");
        assert_eq!(ValueSource::Default.to_string(), "default");
    }
}
