//! Exit entity - a one-way passage from one room to another

use serde::{Deserialize, Serialize};

use crate::keys::{ExitKey, RoomKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    key: ExitKey,
    origin: RoomKey,
    destination: RoomKey,
}

impl Exit {
    pub fn new(
        key: impl Into<ExitKey>,
        origin: impl Into<RoomKey>,
        destination: impl Into<RoomKey>,
    ) -> Self {
        Self {
            key: key.into(),
            origin: origin.into(),
            destination: destination.into(),
        }
    }

    pub fn key(&self) -> &ExitKey {
        &self.key
    }

    /// Room the exit leaves from
    pub fn origin(&self) -> &RoomKey {
        &self.origin
    }

    /// Room the exit leads to
    pub fn destination(&self) -> &RoomKey {
        &self.destination
    }
}
