//! Infrastructure adapters

pub mod ui_binding;

pub use ui_binding::{ChromeSnapshot, ChromeState};
