//! TOML configuration file handling.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use vpc_core::Backend;

/// Errors loading the config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
///
/// ```toml
/// # ~/.config/vpc/config.toml
/// database_path = "/home/me/.local/share/vpc/vpc.db"
///
/// [llm]
/// endpoint = "http://localhost:11434"
/// temperature = 0.3
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to the SQLite database file
    pub database_path: Option<PathBuf>,
    /// LLM request settings
    #[serde(default)]
    pub llm: LlmConfig,
}

/// LLM request settings, applied to every backend unless noted
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Endpoint override; default depends on the backend
    pub endpoint: Option<String>,
    /// Sampling temperature (default 0.3)
    pub temperature: Option<f32>,
    /// Max tokens to generate (Anthropic requires one; default 1024)
    pub max_tokens: Option<u32>,
    /// Request timeout in seconds (default 60)
    pub timeout_secs: Option<u64>,
}

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

impl LlmConfig {
    /// Endpoint for the given backend: the configured override, else the
    /// backend's default base URL
    pub fn endpoint_for(&self, backend: Backend) -> Option<String> {
        self.endpoint
            .clone()
            .or_else(|| backend.default_base_url().map(str::to_string))
    }

    pub fn temperature(&self) -> f32 {
        self.temperature.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)
    }
}

impl Config {
    /// Default config file path: `$XDG_CONFIG_HOME/vpc/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            })
            .join("vpc")
            .join("config.toml")
    }

    /// Load from the given path, or the default path when `None`.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Database file path: the configured one, else
    /// `$XDG_DATA_HOME/vpc/vpc.db`
    pub fn database_path(&self) -> PathBuf {
        self.database_path.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| {
                    dirs::home_dir()
                        .unwrap_or_else(|| PathBuf::from("."))
                        .join(".local")
                        .join("share")
                })
                .join("vpc")
                .join("vpc.db")
        })
    }
}
