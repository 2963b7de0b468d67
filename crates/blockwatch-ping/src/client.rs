//! One-shot status query over a fresh TCP connection.
//!
//! Exchange per the Server List Ping flow: handshake (next state = status),
//! status request, status response, then ping/pong to measure latency.

use std::time::{Duration, Instant};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

use crate::status::StatusResponse;
use crate::varint::{read_string, read_varint, read_varint_stream, write_string, write_varint};
use crate::PingError;

/// Default Java Edition server port.
pub const DEFAULT_PORT: u16 = 25565;

/// Protocol version sent in the status handshake. -1 means "just asking".
const STATUS_PROTOCOL_VERSION: i32 = -1;
const NEXT_STATE_STATUS: i32 = 1;

const PACKET_HANDSHAKE: i32 = 0x00;
const PACKET_STATUS: i32 = 0x00;
const PACKET_PING: i32 = 0x01;

/// Upper bound on an inbound packet. Status responses carry the favicon as
/// base64 PNG, so they can run to a few hundred KiB.
const MAX_PACKET_BYTES: i32 = 1024 * 1024;

/// Result of one status query.
#[derive(Debug, Clone)]
pub struct ServerPing {
    pub status: StatusResponse,
    pub latency: Duration,
}

/// Split a `host[:port]` address, defaulting to port 25565.
///
/// Bare IPv6 literals are not supported; use a resolvable hostname instead.
pub fn parse_address(address: &str) -> Result<(String, u16), PingError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(PingError::InvalidAddress(address.to_string()));
    }

    match address.rsplit_once(':') {
        None => Ok((address.to_string(), DEFAULT_PORT)),
        Some((host, port)) => {
            if host.is_empty() {
                return Err(PingError::InvalidAddress(address.to_string()));
            }
            let port: u16 = port
                .parse()
                .map_err(|_| PingError::InvalidAddress(address.to_string()))?;
            Ok((host.to_string(), port))
        }
    }
}

/// Query a server once, with the whole exchange bounded by `timeout`.
pub async fn ping(address: &str, timeout: Duration) -> Result<ServerPing, PingError> {
    let (host, port) = parse_address(address)?;
    match tokio::time::timeout(timeout, ping_host(&host, port)).await {
        Ok(result) => result,
        Err(_) => Err(PingError::Timeout(timeout)),
    }
}

async fn ping_host(host: &str, port: u16) -> Result<ServerPing, PingError> {
    let mut stream =
        TcpStream::connect((host, port))
            .await
            .map_err(|source| PingError::Connect {
                address: format!("{host}:{port}"),
                source,
            })?;

    // Handshake: protocol version, address, port, next state = status.
    let mut body = Vec::new();
    write_varint(&mut body, STATUS_PROTOCOL_VERSION);
    write_string(&mut body, host);
    body.extend_from_slice(&port.to_be_bytes());
    write_varint(&mut body, NEXT_STATE_STATUS);
    stream.write_all(&encode_packet(PACKET_HANDSHAKE, &body)).await?;

    // Status request (empty body), then the JSON response.
    stream.write_all(&encode_packet(PACKET_STATUS, &[])).await?;
    let (packet_id, payload) = read_packet(&mut stream).await?;
    if packet_id != PACKET_STATUS {
        return Err(PingError::Protocol(format!(
            "expected status response packet 0x00, got 0x{packet_id:02x}"
        )));
    }
    let mut payload = payload.as_slice();
    let json = read_string(&mut payload)?;
    let status: StatusResponse = serde_json::from_str(&json)?;

    // Ping/pong for latency. The server echoes the payload back.
    let token = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    let sent_at = Instant::now();
    stream
        .write_all(&encode_packet(PACKET_PING, &token.to_be_bytes()))
        .await?;
    let (packet_id, payload) = read_packet(&mut stream).await?;
    let latency = sent_at.elapsed();
    if packet_id != PACKET_PING {
        return Err(PingError::Protocol(format!(
            "expected pong packet 0x01, got 0x{packet_id:02x}"
        )));
    }
    let echoed = payload
        .as_slice()
        .try_into()
        .map(i64::from_be_bytes)
        .map_err(|_| PingError::Protocol("pong payload is not 8 bytes".into()))?;
    if echoed != token {
        return Err(PingError::Protocol("pong payload does not match ping".into()));
    }

    debug!(
        host,
        port,
        online = status.players.online,
        max = status.players.max,
        version = %status.version.name,
        latency_ms = latency.as_millis() as u64,
        "status query complete"
    );

    Ok(ServerPing { status, latency })
}

/// Frame a packet: length VarInt, packet id VarInt, body.
fn encode_packet(packet_id: i32, body: &[u8]) -> Vec<u8> {
    let mut payload = Vec::with_capacity(body.len() + 5);
    write_varint(&mut payload, packet_id);
    payload.extend_from_slice(body);

    let mut framed = Vec::with_capacity(payload.len() + 5);
    write_varint(&mut framed, payload.len() as i32);
    framed.extend_from_slice(&payload);
    framed
}

/// Read one framed packet, returning its id and body.
async fn read_packet(stream: &mut TcpStream) -> Result<(i32, Vec<u8>), PingError> {
    let length = read_varint_stream(stream).await?;
    if length <= 0 || length > MAX_PACKET_BYTES {
        return Err(PingError::Protocol(format!(
            "unreasonable packet length {length}"
        )));
    }
    let mut buf = vec![0u8; length as usize];
    stream.read_exact(&mut buf).await?;

    let mut slice = buf.as_slice();
    let packet_id = read_varint(&mut slice)?;
    Ok((packet_id, slice.to_vec()))
}
