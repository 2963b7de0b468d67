//! The status-query seam the watcher polls through.

use std::time::Duration;

use async_trait::async_trait;

use crate::snapshot::Snapshot;

/// Why a status query failed. Always non-fatal to the watcher: a failed
/// tick is logged and skipped with the tracked roster untouched.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("status query timed out after {0:?}")]
    Timeout(Duration),

    #[error("unexpected response: {0}")]
    Protocol(String),
}

/// One status query against the configured server.
///
/// Implementations must be reentrant — the watcher and the on-demand
/// status path may both be mid-fetch at the same time, each on its own
/// connection. No retries; the caller decides when to try again.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self) -> Result<Snapshot, FetchError>;
}
