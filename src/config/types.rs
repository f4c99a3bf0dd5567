//! Configuration type definitions

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CookmateResult;
use crate::logging::{LogFormat, LoggingConfig};

use super::loader::{self, ConfigWarning};

/// Storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-local, nothing persisted
    Memory,
    /// Single TOML document on disk
    #[default]
    Toml,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "memory" => Ok(Backend::Memory),
            "toml" => Ok(Backend::Toml),
            other => Err(format!(
                "unknown backend '{}' (expected memory or toml)",
                other
            )),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_file")]
    pub file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            dir: default_dir(),
            file: default_file(),
        }
    }
}

impl StorageConfig {
    /// Location of the kitchen document: `dir/file`
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file)
    }
}

fn default_dir() -> PathBuf {
    PathBuf::from(".data")
}

fn default_file() -> String {
    "cookmate.toml".to_string()
}

/// Logging configuration as written in config files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Inventory query defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Window used by expiring-soon queries when none is given
    #[serde(default = "default_expiring_days")]
    pub expiring_days: u32,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            expiring_days: default_expiring_days(),
        }
    }
}

fn default_expiring_days() -> u32 {
    3
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LogSettings,

    #[serde(default)]
    pub inventory: InventoryConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> CookmateResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CookmateResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env
    pub fn load_or_default(project_dir: &Path) -> CookmateResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_dir)
    }

    /// Apply environment variable overrides (COOKMATE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::new(self.logging.level.clone(), self.logging.format)
    }
}
