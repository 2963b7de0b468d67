//! Minecraft Java Edition Server List Ping client.
//!
//! Performs one status query per call: TCP connect, handshake, status
//! request, and a ping/pong exchange to measure latency. Each call opens
//! its own connection and closes it on return — there is no connection
//! pooling and no retry logic here.

mod client;
mod status;
mod varint;

pub use client::{parse_address, ping, ServerPing, DEFAULT_PORT};
pub use status::{PlayerSample, Players, StatusResponse, Version};

use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum PingError {
    #[error("invalid server address '{0}'")]
    InvalidAddress(String),

    #[error("could not connect to {address}: {source}")]
    Connect {
        address: String,
        source: std::io::Error,
    },

    #[error("status query timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection error during status exchange: {0}")]
    Io(#[from] std::io::Error),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("malformed status response: {0}")]
    MalformedStatus(#[from] serde_json::Error),
}
