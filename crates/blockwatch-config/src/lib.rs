//! Blockwatch configuration.
//!
//! TOML-based config with serde defaults, so a partial file works out of
//! the box. The one field with no usable default is `server.address` —
//! validation insists on it.

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::{DiscordConfig, ServerConfig, WatchConfig};

use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(std::path::PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Load and validate a config.
///
/// With an explicit path the file must exist. Without one, the platform
/// default path is used and a commented template is created there on first
/// run — which then fails validation with a pointer at the field to fill
/// in, rather than silently watching nothing.
pub fn load_config(path: Option<&Path>) -> Result<WatchConfig, ConfigError> {
    let config = match path {
        Some(path) => loader::load_from_path(path)?,
        None => loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}
