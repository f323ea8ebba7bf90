//! MapStore aggregate - the explored-map graph of one client session
//!
//! # Data
//!
//! - Rooms keyed by [`RoomKey`]; re-adding a key overwrites the record.
//! - Exits keyed by [`ExitKey`]; re-adding a key overwrites the record.
//! - Path adjacency: origin room → destinations, in the order exits arrived.
//!   Derived from exits, appended to on every exit insertion, rebuilt from
//!   empty only by [`MapStore::set_data`] and emptied by [`MapStore::clear`].
//! - The current location, which may name a room the store does not know yet.
//!
//! # Iteration order
//!
//! Rooms, exits, and path origins iterate in the order their keys were first
//! inserted, which is the order the server sent them. Overwriting a record
//! keeps its position. Adjacency sequences keep insertion order.
//!
//! # Failure model
//!
//! Nothing here fails. Unknown keys and missing positions degrade to `None`,
//! skipped edges, or a single centered marker (see `map_scene.rs`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::keyed_table::KeyedTable;
use crate::entities::{Exit, Room};
use crate::keys::{ExitKey, RoomKey};
use crate::value_objects::{normalize_degrees, CompassDirection, DirectionIndex, Position};

/// Complete map pushed by the server, replacing everything known so far
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapSnapshot {
    pub rooms: Vec<Room>,
    pub exits: Vec<Exit>,
}

/// Newly discovered rooms and exits, merged into the known map
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapReveal {
    pub rooms: Option<Vec<Room>>,
    pub exits: Option<Vec<Exit>>,
}

impl MapReveal {
    pub fn is_empty(&self) -> bool {
        self.rooms.as_ref().map_or(true, Vec::is_empty)
            && self.exits.as_ref().map_or(true, Vec::is_empty)
    }
}

/// How exit insertions extend the path adjacency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjacencyPolicy {
    /// Every insertion appends an edge, so revealing the same exit twice draws
    /// the path twice. Matches the server's historical client.
    #[default]
    AppendAlways,
    /// Skip the append when the origin already lists the destination.
    Deduplicate,
}

/// Why an exit has no bearing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BearingError {
    #[error("Unknown exit: {0}")]
    UnknownExit(ExitKey),

    #[error("Unknown room: {0}")]
    UnknownRoom(RoomKey),

    #[error("Room has no position: {0}")]
    MissingPosition(RoomKey),

    #[error("Exit {exit} joins rooms at the same position")]
    CoincidentRooms { exit: ExitKey },
}

#[derive(Debug, Clone, Default)]
pub struct MapStore {
    rooms: KeyedTable<RoomKey, Room>,
    exits: KeyedTable<ExitKey, Exit>,
    paths: KeyedTable<RoomKey, Vec<RoomKey>>,
    current_location: Option<RoomKey>,
    adjacency_policy: AdjacencyPolicy,
}

impl MapStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adjacency_policy(mut self, policy: AdjacencyPolicy) -> Self {
        self.adjacency_policy = policy;
        self
    }

    // Read-only accessors

    pub fn adjacency_policy(&self) -> AdjacencyPolicy {
        self.adjacency_policy
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room(&self, key: &str) -> Option<&Room> {
        self.rooms.get(key)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn exits(&self) -> impl Iterator<Item = &Exit> {
        self.exits.values()
    }

    pub fn exit(&self, key: &str) -> Option<&Exit> {
        self.exits.get(key)
    }

    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }

    /// Destinations reachable from `origin`, in insertion order
    pub fn paths_from(&self, origin: &str) -> &[RoomKey] {
        self.paths.get(origin).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(origin, destinations)` pairs of the path adjacency
    pub fn paths(&self) -> impl Iterator<Item = (&RoomKey, &[RoomKey])> {
        self.paths.iter().map(|(origin, dests)| (origin, dests.as_slice()))
    }

    /// Total number of adjacency edges, duplicates included
    pub fn path_count(&self) -> usize {
        self.paths.values().map(Vec::len).sum()
    }

    pub fn current_location(&self) -> Option<&RoomKey> {
        self.current_location.as_ref()
    }

    /// The current room, if it is known
    pub fn current_room(&self) -> Option<&Room> {
        self.current_location
            .as_ref()
            .and_then(|key| self.rooms.get(key.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.exits.is_empty()
    }

    // Mutations

    /// Forget every room, exit, and path. The current location is kept.
    pub fn clear(&mut self) {
        self.rooms.clear();
        self.exits.clear();
        self.paths.clear();
        tracing::debug!("Cleared explored map");
    }

    /// Replace rooms and exits wholesale and rebuild the adjacency from them.
    pub fn set_data(&mut self, snapshot: MapSnapshot) {
        self.rooms.clear();
        self.exits.clear();
        self.paths.clear();

        for room in snapshot.rooms {
            self.rooms.insert(room.key().clone(), room);
        }
        for exit in snapshot.exits {
            self.insert_exit(exit);
        }

        tracing::debug!(
            rooms = self.rooms.len(),
            exits = self.exits.len(),
            paths = self.path_count(),
            "Replaced explored map"
        );
    }

    /// Record where the player is. The key is not checked against known rooms.
    pub fn set_current_location(&mut self, location: Option<RoomKey>) {
        tracing::debug!(location = ?location, "Current location changed");
        self.current_location = location;
    }

    /// Merge newly discovered rooms and exits into the map.
    pub fn reveal(&mut self, reveal: MapReveal) {
        if reveal.is_empty() {
            return;
        }

        let mut revealed_rooms = 0usize;
        let mut revealed_exits = 0usize;

        if let Some(rooms) = reveal.rooms {
            for room in rooms {
                self.rooms.insert(room.key().clone(), room);
                revealed_rooms += 1;
            }
        }

        if let Some(exits) = reveal.exits {
            for exit in exits {
                self.insert_exit(exit);
                revealed_exits += 1;
            }
        }

        tracing::debug!(
            revealed_rooms,
            revealed_exits,
            paths = self.path_count(),
            "Revealed map data"
        );
    }

    fn insert_exit(&mut self, exit: Exit) {
        let origin = exit.origin().clone();
        let destination = exit.destination().clone();
        self.exits.insert(exit.key().clone(), exit);

        let destinations = self.paths.get_or_insert_with(origin, Vec::new);
        if self.adjacency_policy == AdjacencyPolicy::Deduplicate
            && destinations.contains(&destination)
        {
            return;
        }
        destinations.push(destination);
    }

    // Bearings

    /// Bearing of an exit in degrees, in `[0, 360)`, counter-clockwise from
    /// east with world Y pointing north.
    pub fn exit_direction(&self, exit: &str) -> Option<f64> {
        match self.try_exit_direction(exit) {
            Ok(degree) => Some(degree),
            Err(err) => {
                tracing::trace!(exit, error = %err, "No bearing for exit");
                None
            }
        }
    }

    /// Like [`exit_direction`](Self::exit_direction), reporting why no bearing
    /// exists.
    pub fn try_exit_direction(&self, exit: &str) -> Result<f64, BearingError> {
        let record = self
            .exits
            .get(exit)
            .ok_or_else(|| BearingError::UnknownExit(ExitKey::from(exit)))?;

        let from = self.located(record.origin())?;
        let to = self.located(record.destination())?;
        let (dx, dy) = from.delta_to(&to);

        if dx == 0.0 {
            return if dy > 0.0 {
                Ok(90.0)
            } else if dy < 0.0 {
                Ok(270.0)
            } else {
                Err(BearingError::CoincidentRooms {
                    exit: record.key().clone(),
                })
            };
        }

        Ok(normalize_degrees(dy.atan2(dx).to_degrees()))
    }

    /// Compass point an exit leads towards
    pub fn exit_compass(&self, exit: &str) -> Option<CompassDirection> {
        self.exit_direction(exit).map(CompassDirection::from_degrees)
    }

    /// Sprite grid cell for an exit's direction
    pub fn exit_grid_index(&self, exit: &str) -> Option<DirectionIndex> {
        self.exit_direction(exit).map(DirectionIndex::from_degrees)
    }

    fn located(&self, key: &RoomKey) -> Result<Position, BearingError> {
        let room = self
            .rooms
            .get(key.as_str())
            .ok_or_else(|| BearingError::UnknownRoom(key.clone()))?;
        room.position()
            .ok_or_else(|| BearingError::MissingPosition(key.clone()))
    }
}
