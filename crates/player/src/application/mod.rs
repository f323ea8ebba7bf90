//! Application layer - map session state and localized strings

pub mod localized_strings;
pub mod map_session;

pub use localized_strings::{LocalizationError, LocalizedRecord, LocalizedStrings};
pub use map_session::{map_viewport, MapSession, MAP_HEIGHT_RATIO};
