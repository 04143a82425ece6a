//! flashdeck configuration and source factory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use flashdeck_core::store::STORAGE_KEY;
use flashdeck_core::traits::DeckSource;

use crate::http::{HttpDeckSource, DEFAULT_TIMEOUT_SECS};

/// Top-level flashdeck configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashdeckConfig {
    /// Directory the deck is persisted in.
    #[serde(default = "default_storage_dir")]
    pub storage_dir: PathBuf,
    /// Key the deck is persisted under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Base URL serving `/cards.json`. No remote step when unset.
    #[serde(default)]
    pub remote_url: Option<String>,
    /// HTTP timeout for the remote fetch.
    #[serde(default = "default_timeout")]
    pub fetch_timeout_secs: u64,
}

fn default_storage_dir() -> PathBuf {
    std::env::var("HOME")
        .ok()
        .map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("flashdeck")
        })
        .unwrap_or_else(|| PathBuf::from(".flashdeck"))
}
fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
            storage_key: default_storage_key(),
            remote_url: None,
            fetch_timeout_secs: default_timeout(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Single forward pass: text substituted from a variable is not expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(end) = rest[start..].find('}') else {
            break;
        };
        let var_name = &rest[start + 2..start + end];
        result.push_str(&rest[..start]);
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + end + 1..];
    }
    result.push_str(rest);
    result
}

/// A storage key becomes a file name, so it must not name a path.
fn validate_storage_key(key: &str) -> Result<()> {
    anyhow::ensure!(!key.trim().is_empty(), "storage_key must not be empty");
    anyhow::ensure!(
        !key.contains(['/', '\\']) && !key.contains("..") && !key.starts_with('.'),
        "storage_key must be a plain file name, got {key:?}"
    );
    Ok(())
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `flashdeck.toml` in the current directory
/// 2. `~/.config/flashdeck/config.toml`
///
/// Environment variable overrides: `FLASHDECK_REMOTE_URL`, `FLASHDECK_STORAGE_DIR`.
pub fn load_config() -> Result<FlashdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<FlashdeckConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("flashdeck.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => FlashdeckConfig::default(),
    };

    if let Ok(url) = std::env::var("FLASHDECK_REMOTE_URL") {
        config.remote_url = Some(url);
    }
    if let Ok(dir) = std::env::var("FLASHDECK_STORAGE_DIR") {
        config.storage_dir = PathBuf::from(dir);
    }

    config.remote_url = config
        .remote_url
        .map(|u| resolve_env_vars(&u))
        .filter(|u| !u.trim().is_empty());

    Ok(config)
}

/// Parse a config file body, expanding `${VAR}` references in string values.
pub fn parse_config(content: &str) -> Result<FlashdeckConfig> {
    let mut config: FlashdeckConfig = toml::from_str(content)?;
    config.storage_dir = PathBuf::from(resolve_env_vars(&config.storage_dir.to_string_lossy()));
    config.storage_key = resolve_env_vars(&config.storage_key);
    validate_storage_key(&config.storage_key)?;
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashdeck"))
}

/// Create the remote deck source described by the config, if any.
pub fn create_source(config: &FlashdeckConfig) -> Result<Option<Box<dyn DeckSource>>> {
    match &config.remote_url {
        Some(url) => {
            let source = HttpDeckSource::new(url, config.fetch_timeout_secs)
                .with_context(|| format!("failed to create HTTP client for {url}"))?;
            Ok(Some(Box::new(source)))
        }
        None => Ok(None),
    }
}
