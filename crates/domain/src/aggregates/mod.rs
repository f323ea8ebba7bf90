//! Aggregates for the explored map
//!
//! `MapStore` owns every room, exit, and path the client has discovered.

mod keyed_table;
mod map_scene;
mod map_store;

pub use map_store::{AdjacencyPolicy, BearingError, MapReveal, MapSnapshot, MapStore};
