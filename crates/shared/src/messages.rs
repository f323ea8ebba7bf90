//! Messages pushed by the game server to the map widget
//!
//! ## Versioning Policy
//!
//! - New variants can be added at the end (forward compatible)
//! - Renaming variants is a breaking change
//! - Unknown message types deserialize to `Unknown` for forward compatibility

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ProtocolError;
use crate::map_data::{MapRevealData, MapSnapshotData};

/// Messages from the game server to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ServerMessage {
    /// Full map replacing everything known so far
    MapData(MapSnapshotData),
    /// Newly discovered rooms and exits
    RevealMap(MapRevealData),
    /// The player moved; `null` when the location is unknown
    CurrentLocation {
        #[serde(default)]
        key: Option<String>,
    },
    /// Forget the explored map (new game or character)
    ClearMap,
    /// Display settings to overwrite, key by key
    Settings {
        #[serde(default)]
        values: Map<String, Value>,
    },
    /// Unknown message type for forward compatibility
    ///
    /// When deserializing an unknown variant, this variant is used instead of
    /// failing. Allows older clients to gracefully handle new message types.
    #[serde(other)]
    Unknown,
}

impl ServerMessage {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MapData(_) => "MapData",
            Self::RevealMap(_) => "RevealMap",
            Self::CurrentLocation { .. } => "CurrentLocation",
            Self::ClearMap => "ClearMap",
            Self::Settings { .. } => "Settings",
            Self::Unknown => "Unknown",
        }
    }
}

/// Decode a single message frame
pub fn decode(text: &str) -> Result<ServerMessage, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}

/// Decode a JSON array of messages, e.g. a recorded session
pub fn decode_batch(text: &str) -> Result<Vec<ServerMessage>, ProtocolError> {
    Ok(serde_json::from_str(text)?)
}

pub fn encode(message: &ServerMessage) -> Result<String, ProtocolError> {
    Ok(serde_json::to_string(message)?)
}
