//! The notification seam join/leave events are forwarded through.

use async_trait::async_trait;

use crate::diff::PresenceEvent;

/// Delivery failure reported by a sink. The watcher logs it and moves on;
/// retrying delivery is the sink's own business.
#[derive(Debug, thiserror::Error)]
#[error("notification delivery failed: {0}")]
pub struct SinkError(String);

impl SinkError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Consumes the ordered events of one tick. Never called with an empty
/// batch — a quiet tick sends nothing.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn emit(&self, events: &[PresenceEvent]) -> Result<(), SinkError>;
}
