//! TOML config loading: explicit path or platform default.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::schema::WatchConfig;
use crate::ConfigError;

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<WatchConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )));
        }
    };

    let config: WatchConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/blockwatch/config.toml`
/// On Linux: `~/.config/blockwatch/config.toml`
///
/// Creates a commented template on first run, then loads it.
pub fn load_default() -> Result<WatchConfig, ConfigError> {
    let path = default_config_path()?;
    if !path.exists() {
        create_default_config(&path)?;
    }
    load_from_path(&path)
}

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("blockwatch").join("config.toml"))
}

/// Write a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, DEFAULT_CONFIG_TOML).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

const DEFAULT_CONFIG_TOML: &str = r#"# Blockwatch configuration.

[server]
# Minecraft server to watch, as host or host:port (default port 25565).
address = ""
# Seconds between status queries.
poll_interval = 60
# Seconds before a single status query is abandoned.
timeout = 5

[discord]
# Discord webhook to deliver join/leave notifications to.
# Leave empty to log presence changes without delivering them.
webhook_url = ""
"#;
