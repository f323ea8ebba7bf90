//! Unified error types for the domain layer
//!
//! Map operations themselves never fail: missing rooms, exits, or positions
//! degrade to empty results. These errors cover construction of value objects
//! (viewports, positions) and parsing of compass labels.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., non-finite coordinates)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for value objects built from untrusted input.
    ///
    /// # Example
    /// ```ignore
    /// if !width.is_finite() {
    ///     return Err(DomainError::validation("viewport width must be finite"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("viewport width must be finite");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: viewport width must be finite"
        );
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown compass direction: UP");
        assert_eq!(err.to_string(), "Parse error: Unknown compass direction: UP");
    }
}
