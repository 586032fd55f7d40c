//! bytesio Configuration
//!
//! Handles parsing and management of bytesio.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::stream::MAX_SIZE;

/// Name of the configuration file searched for by [`BytesioConfig::find_and_load`].
pub const CONFIG_FILE: &str = "bytesio.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching bytesio.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BytesioConfig {
    /// Buffer limits
    #[serde(default)]
    pub buffer: BufferConfig,

    /// Logging output
    #[serde(default)]
    pub log: LogConfig,

    /// Command-line defaults
    #[serde(default)]
    pub cli: CliConfig,
}

impl BytesioConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: BytesioConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }
}

/// Buffer limits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BufferConfig {
    /// Largest logical size a buffer accepts, in bytes
    #[serde(default = "default_max_size")]
    pub max_size: usize,
}

fn default_max_size() -> usize {
    MAX_SIZE
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_size(),
        }
    }
}

/// Logging output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is unset (e.g. "warn", "bytesio=trace")
    #[serde(default = "default_level")]
    pub level: String,

    /// Colorize output
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: true,
        }
    }
}

/// Command-line defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Chunk size for `bio chunks` ("all" or a byte count)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: String,

    /// Prefix `bio lines` output with line numbers
    #[serde(default)]
    pub number_lines: bool,
}

fn default_chunk_size() -> String {
    "4096".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            number_lines: false,
        }
    }
}
