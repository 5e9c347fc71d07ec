//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: AppConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::locale::Currency;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("shell.start_route must start with '/', got {0:?}")]
    StartRoute(String),

    #[error("shell.channel_capacity must be greater than zero")]
    ChannelCapacity,

    #[error("storage.path must not be empty unless storage.in_memory is set")]
    StoragePath,

    #[error("locale.currency {0:?} is not a known currency code")]
    Currency(String),

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    LogLevel(String),
}

/// Check an already-parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.shell.start_route.starts_with('/') {
        errors.push(ValidationError::StartRoute(config.shell.start_route.clone()));
    }
    if config.shell.channel_capacity == 0 {
        errors.push(ValidationError::ChannelCapacity);
    }
    if !config.storage.in_memory && config.storage.path.as_os_str().is_empty() {
        errors.push(ValidationError::StoragePath);
    }
    if config.locale.currency.parse::<Currency>().is_err() {
        errors.push(ValidationError::Currency(config.locale.currency.clone()));
    }
    if !LOG_LEVELS.contains(&config.observability.log_level.as_str()) {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
