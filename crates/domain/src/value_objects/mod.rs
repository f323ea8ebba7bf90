//! Value objects for the explored map
//!
//! Immutable values with no identity of their own: positions, compass
//! buckets, scene geometry, and the display settings bag.

mod compass;
mod position;
mod scene;
mod settings;

pub use compass::{
    direction_index, direction_name, normalize_degrees, CompassDirection, DirectionIndex,
};
pub use position::Position;
pub(crate) use scene::ScreenTransform;
pub use scene::{LineSegment, MapStyle, RoomMarker, Scene, Viewport};
pub use settings::{
    env_keys, keys as setting_keys, SettingsBag, DEFAULT_MAP_ROOM_SIZE, DEFAULT_MAP_SCALE,
};
