//! VarInt and string encoding for the Minecraft packet format.
//!
//! VarInts are 32-bit, little-endian groups of 7 bits with a continuation
//! flag, at most 5 bytes. Strings are a VarInt byte length followed by UTF-8.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::PingError;

/// Append a VarInt to a buffer.
pub fn write_varint(buf: &mut Vec<u8>, value: i32) {
    let mut v = value as u32;
    loop {
        let mut byte = (v & 0x7f) as u8;
        v >>= 7;
        if v != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if v == 0 {
            return;
        }
    }
}

/// Append a length-prefixed UTF-8 string to a buffer.
pub fn write_string(buf: &mut Vec<u8>, s: &str) {
    write_varint(buf, s.len() as i32);
    buf.extend_from_slice(s.as_bytes());
}

/// Decode a VarInt from the front of a slice, consuming the bytes read.
pub fn read_varint(input: &mut &[u8]) -> Result<i32, PingError> {
    let mut value: u32 = 0;
    for i in 0..5 {
        let Some((&byte, rest)) = input.split_first() else {
            return Err(PingError::Protocol("truncated VarInt".into()));
        };
        *input = rest;
        value |= ((byte & 0x7f) as u32) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    Err(PingError::Protocol("VarInt longer than 5 bytes".into()))
}

/// Decode a length-prefixed UTF-8 string from the front of a slice.
pub fn read_string(input: &mut &[u8]) -> Result<String, PingError> {
    let len = read_varint(input)?;
    if len < 0 || len as usize > input.len() {
        return Err(PingError::Protocol(format!(
            "string length {len} exceeds remaining packet bytes"
        )));
    }
    let (bytes, rest) = input.split_at(len as usize);
    *input = rest;
    String::from_utf8(bytes.to_vec())
        .map_err(|_| PingError::Protocol("string is not valid UTF-8".into()))
}

/// Read a VarInt directly off a stream, one byte at a time.
pub async fn read_varint_stream<R: AsyncRead + Unpin>(reader: &mut R) -> Result<i32, PingError> {
    let mut value: u32 = 0;
    for i in 0..5 {
        let byte = reader.read_u8().await?;
        value |= ((byte & 0x7f) as u32) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value as i32);
        }
    }
    Err(PingError::Protocol("VarInt longer than 5 bytes".into()))
}
