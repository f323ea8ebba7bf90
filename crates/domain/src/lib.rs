//! Explored-map domain: rooms, exits, compass bearings, scene layout, and the
//! display settings bag.

pub mod aggregates;
pub mod common;
pub mod entities;
pub mod error;
pub mod keys;
pub mod value_objects;

pub use aggregates::{AdjacencyPolicy, BearingError, MapReveal, MapSnapshot, MapStore};
pub use entities::{Exit, Room};
pub use error::DomainError;
pub use keys::{ExitKey, RoomKey};
pub use value_objects::{
    direction_index, direction_name, normalize_degrees, setting_keys, CompassDirection,
    DirectionIndex, LineSegment, MapStyle, Position, RoomMarker, Scene, SettingsBag, Viewport,
    DEFAULT_MAP_ROOM_SIZE, DEFAULT_MAP_SCALE,
};
