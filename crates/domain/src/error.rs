//! Unified error types for the domain layer
//!
//! Structural misconfiguration (bad threshold tables, negative score caps)
//! fails fast at construction time. Expected edge cases such as experience
//! below the first breakpoint are typed results, never errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid configuration caught at construction time
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// A required collaborator has not been wired up yet
    #[error("Not ready: {0}")]
    NotReady(String),

    /// Name-based lookup missed
    #[error("Entity not found: {entity_type} named {name:?}")]
    NotFound {
        entity_type: &'static str,
        name: String,
    },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a configuration error for invariants that must hold at
    /// construction time.
    ///
    /// Use this when a type cannot be built in a usable state:
    /// - Threshold tables that are empty or not strictly ascending
    /// - A negative maximum attribute score
    /// - A trait whose minimum level exceeds its maximum
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a not-ready error for derivations requested before their
    /// dependencies are wired up (e.g., a skill with no owning character).
    pub fn not_ready(msg: impl Into<String>) -> Self {
        Self::NotReady(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, name: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            name: name.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures in
    /// `FromStr` implementations.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error() {
        let err = DomainError::configuration("threshold table is empty");
        assert!(matches!(err, DomainError::Configuration(_)));
        assert_eq!(
            err.to_string(),
            "Invalid configuration: threshold table is empty"
        );
    }

    #[test]
    fn test_not_ready_error() {
        let err = DomainError::not_ready("skill has no owning character");
        assert!(matches!(err, DomainError::NotReady(_)));
        assert!(err.to_string().contains("owning character"));
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("Skill", "Archery");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(err.to_string().contains("Skill"));
        assert!(err.to_string().contains("Archery"));
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("unknown complexity rating: XX");
        assert_eq!(err.to_string(), "Parse error: unknown complexity rating: XX");
    }
}
