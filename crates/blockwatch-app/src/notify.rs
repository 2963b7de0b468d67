//! Notification sinks: Discord webhook delivery and a log-only fallback.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use blockwatch_core::{NotificationSink, PresenceEvent, SinkError, Snapshot};

use crate::summary::latency_display;

/// Delivers join/leave messages and status embeds to a Discord webhook.
pub struct DiscordWebhookSink {
    url: String,
    http: reqwest::Client,
}

impl DiscordWebhookSink {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http: reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(30))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Post a point-in-time status summary as an embed.
    pub async fn post_summary(&self, snapshot: &Snapshot) -> Result<(), SinkError> {
        self.post(&status_embed(snapshot)).await
    }

    async fn post(&self, payload: &serde_json::Value) -> Result<(), SinkError> {
        let response = self
            .http
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| SinkError::new(format!("webhook request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(SinkError::new(format!(
                "webhook returned {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for DiscordWebhookSink {
    async fn emit(&self, events: &[PresenceEvent]) -> Result<(), SinkError> {
        // One message per player, in tick order.
        for event in events {
            self.post(&serde_json::json!({ "content": event_message(event) }))
                .await?;
        }
        Ok(())
    }
}

/// Fallback sink when no webhook is configured: presence changes only show
/// up in the log.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn emit(&self, events: &[PresenceEvent]) -> Result<(), SinkError> {
        for event in events {
            match event {
                PresenceEvent::Arrived { name } => info!(player = %name, "logged in"),
                PresenceEvent::Departed { name } => info!(player = %name, "logged off"),
            }
        }
        Ok(())
    }
}

/// Message text for one presence event.
pub fn event_message(event: &PresenceEvent) -> String {
    match event {
        PresenceEvent::Arrived { name } => format!("✅ **{name}** logged into the server!"),
        PresenceEvent::Departed { name } => format!("❌ **{name}** logged off the server."),
    }
}

/// Discord embed payload for an on-demand status summary.
pub fn status_embed(snapshot: &Snapshot) -> serde_json::Value {
    let mut fields = vec![
        serde_json::json!({
            "name": "Players Online",
            "value": format!("{}/{}", snapshot.online, snapshot.max),
            "inline": true,
        }),
        serde_json::json!({
            "name": "Version",
            "value": snapshot.version.clone(),
            "inline": true,
        }),
        serde_json::json!({
            "name": "Latency",
            "value": latency_display(snapshot.latency),
            "inline": true,
        }),
    ];
    if !snapshot.player_names.is_empty() {
        fields.push(serde_json::json!({
            "name": "Online Players",
            "value": snapshot.player_names.join("\n"),
            "inline": false,
        }));
    }

    serde_json::json!({
        "embeds": [{
            "title": "Minecraft Server Status",
            "color": 0x00ff00,
            "fields": fields,
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str]) -> Snapshot {
        Snapshot {
            player_names: names.iter().map(|n| n.to_string()).collect(),
            online: names.len() as u32,
            max: 20,
            version: "1.21.4".into(),
            latency: Duration::from_millis(40),
        }
    }

    #[test]
    fn join_and_leave_messages() {
        assert_eq!(
            event_message(&PresenceEvent::Arrived {
                name: "Alice".into()
            }),
            "✅ **Alice** logged into the server!"
        );
        assert_eq!(
            event_message(&PresenceEvent::Departed { name: "Bob".into() }),
            "❌ **Bob** logged off the server."
        );
    }

    #[test]
    fn embed_carries_status_fields() {
        let embed = status_embed(&snapshot(&["Alice", "Bob"]));
        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(fields[0]["value"], "2/20");
        assert_eq!(fields[1]["value"], "1.21.4");
        assert_eq!(fields[3]["value"], "Alice\nBob");
        assert_eq!(embed["embeds"][0]["color"], 0x00ff00);
    }

    #[test]
    fn embed_omits_player_list_when_hidden() {
        let embed = status_embed(&snapshot(&[]));
        let fields = embed["embeds"][0]["fields"].as_array().unwrap();
        assert_eq!(fields.len(), 3);
    }
}
