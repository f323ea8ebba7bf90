//! Renderer-agnostic map scene
//!
//! A [`Scene`] is plain data in screen pixels. Binding it to an actual drawing
//! surface (SVG, canvas) is the UI layer's job.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::keys::RoomKey;

/// Size of the box the map is drawn into, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, DomainError> {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(DomainError::validation(format!(
                "viewport must be finite and non-negative, got {}x{}",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Marker size and world-to-pixel scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapStyle {
    /// Side length of each room square, in pixels
    pub room_size: f64,
    /// Pixels per world unit
    pub scale: f64,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            room_size: super::settings::DEFAULT_MAP_ROOM_SIZE,
            scale: super::settings::DEFAULT_MAP_SCALE,
        }
    }
}

/// A path drawn between two rooms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// A room square with its centered label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMarker {
    pub room_key: RoomKey,
    /// Center of the square
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub is_current: bool,
    /// Tag-stripped, truncated room name
    pub label: String,
}

impl RoomMarker {
    /// Left edge of the square
    pub fn left(&self) -> f64 {
        self.x - self.size / 2.0
    }

    /// Top edge of the square
    pub fn top(&self) -> f64 {
        self.y - self.size / 2.0
    }
}

/// Everything needed to draw the map into a viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub segments: Vec<LineSegment>,
    pub markers: Vec<RoomMarker>,
}

impl Scene {
    /// A scene with nothing to draw. The container is still sized.
    pub fn empty(viewport: Viewport) -> Self {
        Self {
            width: viewport.width(),
            height: viewport.height(),
            segments: Vec::new(),
            markers: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.markers.is_empty()
    }

    pub fn current_marker(&self) -> Option<&RoomMarker> {
        self.markers.iter().find(|marker| marker.is_current)
    }
}

/// World-to-screen transform centered on the current room
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ScreenTransform {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale: f64,
}

impl ScreenTransform {
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x * self.scale + self.origin_x, -y * self.scale + self.origin_y)
    }
}
