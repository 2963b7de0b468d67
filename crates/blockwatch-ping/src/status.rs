//! Serde model of the status-response JSON.
//!
//! Servers vary in what they include: the player sample is optional (and
//! often hidden), and extra fields like the favicon or MOTD components are
//! ignored.

use serde::Deserialize;

/// The JSON document a server returns for a status request.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    pub version: Version,
    pub players: Players,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Version {
    pub name: String,
    pub protocol: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Players {
    pub online: u32,
    pub max: u32,
    /// A (possibly partial) list of online players. Absent when the server
    /// hides it, in which case presence tracking sees an empty roster.
    #[serde(default)]
    pub sample: Vec<PlayerSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerSample {
    pub name: String,
    #[serde(default)]
    pub id: String,
}

impl StatusResponse {
    /// Names from the player sample, in the order the server sent them.
    pub fn player_names(&self) -> Vec<String> {
        self.players.sample.iter().map(|p| p.name.clone()).collect()
    }
}
