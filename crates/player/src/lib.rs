//! mudmap Player
//!
//! Client side of the map widget: applies server pushes to a per-session
//! [`application::MapSession`], drives page chrome through
//! [`ports::outbound::UiBindingPort`], and renders the map as SVG with Dioxus.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod ui;

pub use application::{LocalizedStrings, MapSession};
pub use infrastructure::{ChromeSnapshot, ChromeState};
pub use ui::app;
