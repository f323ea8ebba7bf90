//! mudmap Shared - Wire types pushed by the game server to the map widget
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde, serde_json, thiserror, and tracing
//! 2. **No business logic** - Wire shapes and their conversion into domain types
//! 3. **WASM compatible** - Must compile for both native and wasm32 targets

pub mod error;
pub mod map_data;
pub mod messages;
pub mod table;

pub use error::ProtocolError;
pub use map_data::{ExitEntry, ExitTable, MapRevealData, MapSnapshotData, RoomEntry, RoomTable};
pub use messages::{decode, decode_batch, encode, ServerMessage};
pub use table::WireTable;
