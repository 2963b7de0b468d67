//! Adapts the Server List Ping client to the core fetch seam.

use std::time::Duration;

use async_trait::async_trait;

use blockwatch_core::{FetchError, Snapshot, StatusFetcher};
use blockwatch_ping::PingError;

/// Fetches status via Server List Ping. Holds only the target address and
/// timeout — each fetch opens its own connection, so concurrent fetches
/// (watcher tick plus an on-demand query) never share state.
pub struct SlpFetcher {
    address: String,
    timeout: Duration,
}

impl SlpFetcher {
    pub fn new(address: impl Into<String>, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            timeout,
        }
    }
}

#[async_trait]
impl StatusFetcher for SlpFetcher {
    async fn fetch(&self) -> Result<Snapshot, FetchError> {
        let ping = blockwatch_ping::ping(&self.address, self.timeout)
            .await
            .map_err(map_error)?;
        Ok(Snapshot {
            player_names: ping.status.player_names(),
            online: ping.status.players.online,
            max: ping.status.players.max,
            version: ping.status.version.name,
            latency: ping.latency,
        })
    }
}

fn map_error(error: PingError) -> FetchError {
    match &error {
        PingError::Timeout(timeout) => FetchError::Timeout(*timeout),
        PingError::Connect { .. } | PingError::Io(_) | PingError::InvalidAddress(_) => {
            FetchError::Unreachable(error.to_string())
        }
        PingError::Protocol(_) | PingError::MalformedStatus(_) => {
            FetchError::Protocol(error.to_string())
        }
    }
}
