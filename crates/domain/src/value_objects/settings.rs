//! Client display settings
//!
//! The game server pushes settings as a flat JSON object whenever it wants to
//! reconfigure the client. The bag applies those pushes key by key (last write
//! wins) without validating them. Typed accessors coerce loosely the way the
//! web client always has: numeric strings are numbers, `0` and `""` are false,
//! numbers and booleans read as text. A value that cannot be coerced, or a
//! key never written, reads as the built-in default.
//!
//! # Environment overrides
//!
//! Before the first push, `SettingsBag::from_env` seeds values from
//! `MUDMAP_*` environment variables (see [`env_keys`]).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scene::MapStyle;

/// Setting names as pushed by the server
pub mod keys {
    pub const LANGUAGE: &str = "language";
    pub const MAP_ROOM_SIZE: &str = "map_room_size";
    pub const MAP_SCALE: &str = "map_scale";
    pub const SHOW_COMMAND_BOX: &str = "show_command_box";
    pub const CAN_CLOSE_DIALOGUE: &str = "can_close_dialogue";
    pub const GAME_TITLE: &str = "game_title";
    pub const RESOURCE_LOCATION: &str = "resource_location";

    /// Free-text settings, never parsed from the environment
    pub const TEXT: [&str; 3] = [LANGUAGE, GAME_TITLE, RESOURCE_LOCATION];
}

/// Environment variables read by [`SettingsBag::from_env`], paired with the
/// setting they seed
pub mod env_keys {
    pub const ALL: [(&str, &str); 7] = [
        ("MUDMAP_LANGUAGE", super::keys::LANGUAGE),
        ("MUDMAP_MAP_ROOM_SIZE", super::keys::MAP_ROOM_SIZE),
        ("MUDMAP_MAP_SCALE", super::keys::MAP_SCALE),
        ("MUDMAP_SHOW_COMMAND_BOX", super::keys::SHOW_COMMAND_BOX),
        ("MUDMAP_CAN_CLOSE_DIALOGUE", super::keys::CAN_CLOSE_DIALOGUE),
        ("MUDMAP_GAME_TITLE", super::keys::GAME_TITLE),
        ("MUDMAP_RESOURCE_LOCATION", super::keys::RESOURCE_LOCATION),
    ];
}

pub const DEFAULT_MAP_ROOM_SIZE: f64 = 40.0;
pub const DEFAULT_MAP_SCALE: f64 = 75.0;

/// Flat, mutable key/value store of display options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingsBag {
    values: BTreeMap<String, Value>,
}

impl SettingsBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from `MUDMAP_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seed from an arbitrary variable lookup.
    ///
    /// Text settings are stored verbatim. For the others, values that parse
    /// as JSON scalars (`75`, `true`) are stored typed and anything else is
    /// stored as a string.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut bag = Self::new();
        for (env_key, setting) in env_keys::ALL {
            if let Some(raw) = lookup(env_key) {
                let value = if keys::TEXT.contains(&setting) {
                    Value::String(raw)
                } else {
                    match serde_json::from_str::<Value>(&raw) {
                        Ok(parsed) if !parsed.is_object() && !parsed.is_array() => parsed,
                        _ => Value::String(raw),
                    }
                };
                bag.values.insert(setting.to_string(), value);
            }
        }
        bag
    }

    /// Overwrite every supplied key. Unknown keys are created.
    pub fn set(&mut self, values: impl IntoIterator<Item = (String, Value)>) {
        let mut written = 0usize;
        for (key, value) in values {
            self.values.insert(key, value);
            written += 1;
        }
        tracing::debug!(written, total = self.values.len(), "Applied settings push");
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    // Typed accessors

    pub fn language(&self) -> String {
        self.string_or(keys::LANGUAGE, "")
    }

    pub fn map_room_size(&self) -> f64 {
        self.number_or(keys::MAP_ROOM_SIZE, DEFAULT_MAP_ROOM_SIZE)
    }

    pub fn map_scale(&self) -> f64 {
        self.number_or(keys::MAP_SCALE, DEFAULT_MAP_SCALE)
    }

    pub fn show_command_box(&self) -> bool {
        self.bool_or(keys::SHOW_COMMAND_BOX, false)
    }

    pub fn can_close_dialogue(&self) -> bool {
        self.bool_or(keys::CAN_CLOSE_DIALOGUE, false)
    }

    pub fn game_title(&self) -> String {
        self.string_or(keys::GAME_TITLE, "")
    }

    pub fn resource_location(&self) -> String {
        self.string_or(keys::RESOURCE_LOCATION, "")
    }

    /// Room size and pixel scale used when laying out the map scene
    pub fn map_style(&self) -> MapStyle {
        MapStyle {
            room_size: self.map_room_size(),
            scale: self.map_scale(),
        }
    }

    fn number_or(&self, key: &str, default: f64) -> f64 {
        let Some(value) = self.values.get(key) else {
            return default;
        };
        let number = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        };
        match number.filter(|n| n.is_finite()) {
            Some(n) => n,
            None => {
                tracing::warn!(key, %value, default, "Setting is not a number, using default");
                default
            }
        }
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            None | Some(Value::Null) => default,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(_) | Value::Object(_)) => true,
        }
    }

    fn string_or(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            None | Some(Value::Null) => default.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(value) => {
                tracing::warn!(key, %value, default, "Setting is not a string, using default");
                default.to_string()
            }
        }
    }
}
