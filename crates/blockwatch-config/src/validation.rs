//! Field checks, collected into a single error naming every problem.

use crate::schema::WatchConfig;
use crate::ConfigError;

pub fn validate(config: &WatchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if config.server.address.trim().is_empty() {
        errors.push("server.address must be set (host or host:port)".into());
    }
    if config.server.poll_interval == 0 {
        errors.push("server.poll_interval must be at least 1 second".into());
    }
    if config.server.timeout == 0 {
        errors.push("server.timeout must be at least 1 second".into());
    }
    if config.discord.enabled() && !config.discord.webhook_url.starts_with("https://") {
        errors.push("discord.webhook_url must be an https:// URL".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::WatchConfig;

    fn valid() -> WatchConfig {
        let mut config = WatchConfig::default();
        config.server.address = "mc.example.com".into();
        config
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate(&valid()).is_ok());
    }

    #[test]
    fn empty_address_is_rejected() {
        let config = WatchConfig::default();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("server.address"));
    }

    #[test]
    fn zero_interval_and_timeout_are_rejected_together() {
        let mut config = valid();
        config.server.poll_interval = 0;
        config.server.timeout = 0;
        let err = validate(&config).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("poll_interval"));
        assert!(message.contains("timeout"));
    }

    #[test]
    fn plain_http_webhook_is_rejected() {
        let mut config = valid();
        config.discord.webhook_url = "http://discord.com/api/webhooks/1/abc".into();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("webhook_url"));
    }
}
