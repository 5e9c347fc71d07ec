//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by reference to the shell and CLI
//! ```
//!
//! # Design Decisions
//! - Config is not changed after the binaries apply their flag overrides
//! - All fields have defaults to allow minimal (or absent) config files
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{AppConfig, DataConfig, LocaleConfig, ObservabilityConfig, ShellConfig, StorageConfig};
pub use validation::{validate_config, ValidationError};
