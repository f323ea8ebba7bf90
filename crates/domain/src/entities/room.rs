//! Room entity - a discovered location on the explored map
//!
//! Rooms can be known before their coordinates are resolved, so the position
//! is optional. Rooms without a position are never drawn except as the
//! current room.

use serde::{Deserialize, Serialize};

use crate::keys::RoomKey;
use crate::value_objects::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    key: RoomKey,
    name: String,
    position: Option<Position>,
}

impl Room {
    pub fn new(key: impl Into<RoomKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            position: None,
        }
    }

    // Read-only accessors

    pub fn key(&self) -> &RoomKey {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    // Builder-style methods

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_optional_position(mut self, position: Option<Position>) -> Self {
        self.position = position;
        self
    }
}
