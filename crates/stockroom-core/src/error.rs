//! # Error Types
//!
//! Domain-specific error types for stockroom-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockroom-core errors (this file)                                  │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  stockroom-db errors (separate crate)                               │
//! │  └── StoreError       - Storage and referential failures            │
//! │                                                                     │
//! │  stockroom-api errors (boundary)                                    │
//! │  └── ApiError         - Structured {code, message} result           │
//! │                                                                     │
//! │  Flow: ValidationError → StoreError → ApiError → caller             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value)
//! 3. Errors are enum variants, never String
//! 4. Validation errors are detected before any mutation

use thiserror::Error;

/// Input validation errors.
///
/// These occur when caller input doesn't meet the domain rules. They are
/// raised before business logic runs, so a failed validation never has
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be a positive integer.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of the storable range.
    #[error("{field} must stay between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set (e.g. an unrecognized movement kind).
    #[error("{field} '{value}' is not one of {allowed:?}")]
    NotAllowed {
        field: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_not_allowed_message_lists_variants() {
        let err = ValidationError::NotAllowed {
            field: "kind".to_string(),
            value: "SIDEWAYS".to_string(),
            allowed: vec!["INBOUND".to_string(), "OUTBOUND".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("SIDEWAYS"));
        assert!(msg.contains("INBOUND"));
    }
}
