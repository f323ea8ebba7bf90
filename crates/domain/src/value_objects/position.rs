//! World-space position of a room on the explored map

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A room's position in world units.
///
/// World Y points up (north); the scene transform flips it for screen space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Result<Self, DomainError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(DomainError::validation(format!(
                "position coordinates must be finite, got ({}, {})",
                x, y
            )));
        }
        Ok(Self { x, y })
    }

    /// Offset from this position to `other` as `(dx, dy)`.
    pub fn delta_to(&self, other: &Position) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }
}

impl TryFrom<[f64; 2]> for Position {
    type Error = DomainError;

    fn try_from(value: [f64; 2]) -> Result<Self, Self::Error> {
        Self::new(value[0], value[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite_coordinates() {
        assert!(Position::new(f64::NAN, 0.0).is_err());
        assert!(Position::new(0.0, f64::INFINITY).is_err());
        assert!(Position::new(-3.5, 2.0).is_ok());
    }

    #[test]
    fn test_delta_to() {
        let from = Position::new(1.0, 1.0).expect("finite");
        let to = Position::new(4.0, -1.0).expect("finite");
        assert_eq!(from.delta_to(&to), (3.0, -2.0));
    }
}
