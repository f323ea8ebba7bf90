//! Compass buckets for exit bearings
//!
//! Bearings are degrees counter-clockwise from world +X (east = 0, north = 90).
//! Both lookups use eight 45° buckets centered on the compass points, with
//! boundaries at 22.5° + k·45° after wrapping the input into `[0, 360)`.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the eight compass points an exit can lead towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassDirection {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 8] = [
        Self::East,
        Self::NorthEast,
        Self::North,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::South,
        Self::SouthEast,
    ];

    /// Bucket a bearing. Non-finite input falls into the east bucket.
    pub fn from_degrees(degree: f64) -> Self {
        let degree = normalize_degrees(degree);
        if degree < 22.5 {
            Self::East
        } else if degree < 67.5 {
            Self::NorthEast
        } else if degree < 112.5 {
            Self::North
        } else if degree < 157.5 {
            Self::NorthWest
        } else if degree < 202.5 {
            Self::West
        } else if degree < 247.5 {
            Self::SouthWest
        } else if degree < 292.5 {
            Self::South
        } else if degree < 337.5 {
            Self::SouthEast
        } else {
            Self::East
        }
    }

    /// Short compass label ("E", "NE", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::NorthEast => "NE",
            Self::North => "N",
            Self::NorthWest => "NW",
            Self::West => "W",
            Self::SouthWest => "SW",
            Self::South => "S",
            Self::SouthEast => "SE",
        }
    }

    /// Key looked up in the localized string table, e.g. `"(E)"`
    pub fn localization_key(&self) -> &'static str {
        match self {
            Self::East => "(E)",
            Self::NorthEast => "(NE)",
            Self::North => "(N)",
            Self::NorthWest => "(NW)",
            Self::West => "(W)",
            Self::SouthWest => "(SW)",
            Self::South => "(S)",
            Self::SouthEast => "(SE)",
        }
    }

    pub fn grid_index(&self) -> DirectionIndex {
        match self {
            Self::East => DirectionIndex::East,
            Self::NorthEast => DirectionIndex::NorthEast,
            Self::North => DirectionIndex::North,
            Self::NorthWest => DirectionIndex::NorthWest,
            Self::West => DirectionIndex::West,
            Self::SouthWest => DirectionIndex::SouthWest,
            Self::South => DirectionIndex::South,
            Self::SouthEast => DirectionIndex::SouthEast,
        }
    }
}

impl std::fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for CompassDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        Self::ALL
            .into_iter()
            .find(|dir| dir.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DomainError::parse(format!("Unknown compass direction: {}", s)))
    }
}

/// Cell of a 3×3 sprite sheet laid out as a compass rose:
///
/// ```text
///  0  1  2
///  6  7  8
/// 12 13 14
/// ```
///
/// Sprite lookups key on these exact values; the numbering is sparse on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DirectionIndex {
    NorthWest = 0,
    North = 1,
    NorthEast = 2,
    West = 6,
    Center = 7,
    East = 8,
    SouthWest = 12,
    South = 13,
    SouthEast = 14,
}

impl DirectionIndex {
    pub fn from_degrees(degree: f64) -> Self {
        CompassDirection::from_degrees(degree).grid_index()
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<DirectionIndex> for u8 {
    fn from(value: DirectionIndex) -> Self {
        value.as_u8()
    }
}

/// Compass label for a bearing, wrapping modulo 360.
pub fn direction_name(degree: f64) -> CompassDirection {
    CompassDirection::from_degrees(degree)
}

/// Sparse grid index for a bearing, wrapping modulo 360.
pub fn direction_index(degree: f64) -> u8 {
    DirectionIndex::from_degrees(degree).as_u8()
}

/// Wrap into `[0, 360)`. Non-finite input stays non-finite.
pub fn normalize_degrees(degree: f64) -> f64 {
    let wrapped = degree.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
