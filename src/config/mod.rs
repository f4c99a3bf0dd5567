//! Configuration module for Cookmate
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (COOKMATE_*)
//! 3. Project config (./cookmate.toml)
//! 4. User config (<config_dir>/cookmate/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{Backend, Config, InventoryConfig, LogSettings, StorageConfig};
