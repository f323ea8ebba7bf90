//! Common utility functions shared across the map crates.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **WASM compatible** - all code must work in both native and WASM targets

pub mod string;

// Re-export commonly used functions at crate root for convenience
pub use string::{none_if_empty, room_label, strip_tags, truncate_chars, ROOM_LABEL_MAX_CHARS};
