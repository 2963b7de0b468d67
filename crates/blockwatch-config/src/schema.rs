//! Config schema. Every section uses serde defaults so partial files work.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchConfig {
    pub server: ServerConfig,
    pub discord: DiscordConfig,
}

/// The server to watch and how often to ask it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// `host[:port]`; port defaults to 25565. Required.
    pub address: String,
    /// Seconds between status queries.
    pub poll_interval: u64,
    /// Seconds before a single status query is abandoned.
    pub timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            poll_interval: 60,
            timeout: 5,
        }
    }
}

/// Where notifications go. Empty URL disables delivery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    pub webhook_url: String,
}

impl DiscordConfig {
    pub fn enabled(&self) -> bool {
        !self.webhook_url.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = WatchConfig::default();
        assert!(config.server.address.is_empty());
        assert_eq!(config.server.poll_interval, 60);
        assert_eq!(config.server.timeout, 5);
        assert!(!config.discord.enabled());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: WatchConfig = toml::from_str(
            r#"
[server]
address = "mc.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.server.address, "mc.example.com");
        assert_eq!(config.server.poll_interval, 60);
        assert!(!config.discord.enabled());
    }

    #[test]
    fn full_toml_round_trips() {
        let config: WatchConfig = toml::from_str(
            r#"
[server]
address = "mc.example.com:25570"
poll_interval = 30
timeout = 10

[discord]
webhook_url = "https://discord.com/api/webhooks/1/abc"
"#,
        )
        .unwrap();
        assert_eq!(config.server.poll_interval, 30);
        assert!(config.discord.enabled());

        let serialized = toml::to_string(&config).unwrap();
        let reparsed: WatchConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.server.address, "mc.example.com:25570");
        assert_eq!(reparsed.discord.webhook_url, config.discord.webhook_url);
    }
}
