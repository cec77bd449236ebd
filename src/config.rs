//! Configuration management with TOML, environment variables, and CLI overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Marketplace site id (MLA = Argentina)
    #[serde(default = "default_site")]
    pub site: String,

    /// Access token passed as a query parameter when present
    #[serde(default)]
    pub access_token: Option<String>,

    /// Proxy URL (e.g., socks5://host:port)
    #[serde(default)]
    pub proxy: Option<String>,

    /// Base delay between requests in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Random jitter added to delay (0 to this value)
    #[serde(default = "default_delay_jitter_ms")]
    pub delay_jitter_ms: u64,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Page size requested from the search endpoint
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,

    /// Cap on pages fetched per region (unbounded when unset)
    #[serde(default)]
    pub page_limit: Option<u32>,

    /// Directory exports are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Base file name for the dated export
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_site() -> String {
    "MLA".to_string()
}

fn default_delay_ms() -> u64 {
    500
}

fn default_delay_jitter_ms() -> u64 {
    500
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_result_limit() -> u32 {
    50
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_file_name() -> String {
    "data.csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: default_site(),
            access_token: None,
            proxy: None,
            delay_ms: default_delay_ms(),
            delay_jitter_ms: default_delay_jitter_ms(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            result_limit: default_result_limit(),
            page_limit: None,
            output_dir: default_output_dir(),
            file_name: default_file_name(),
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("meli-crawler").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(token) = std::env::var("MELI_ACCESS_TOKEN") {
            if !token.is_empty() {
                self.access_token = Some(token);
            }
        }

        if let Ok(proxy) = std::env::var("MELI_PROXY") {
            self.proxy = Some(proxy);
        }

        if let Ok(delay) = std::env::var("MELI_DELAY") {
            if let Ok(d) = delay.parse() {
                self.delay_ms = d;
            }
        }

        self
    }
}
