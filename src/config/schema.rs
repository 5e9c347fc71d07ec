//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Where state is persisted.
    pub storage: StorageConfig,

    /// Interactive shell settings.
    pub shell: ShellConfig,

    /// Display preferences.
    pub locale: LocaleConfig,

    /// Logging.
    pub observability: ObservabilityConfig,

    /// Sample data behaviour.
    pub data: DataConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON store file.
    pub path: PathBuf,

    /// Keep everything in memory and never touch disk.
    pub in_memory: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("daftar-store.json"),
            in_memory: false,
        }
    }
}

/// Shell configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Route loaded at startup when no hash is given.
    pub start_route: String,

    /// Prompt printed before each command.
    pub prompt: String,

    /// Capacity of the command channel feeding the navigation actor.
    pub channel_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_route: "/".to_string(),
            prompt: "daftar> ".to_string(),
            channel_capacity: 32,
        }
    }
}

/// Locale configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocaleConfig {
    /// Currency used when a record does not name one.
    pub currency: String,

    /// Render digits in Persian.
    pub persian_digits: bool,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            currency: "IRR".to_string(),
            persian_digits: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Data configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DataConfig {
    /// Seed sample records for collections missing from the store.
    pub seed_sample_data: bool,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
        }
    }
}
