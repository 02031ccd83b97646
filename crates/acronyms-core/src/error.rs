//! # Error Types
//!
//! Validation error types for acronyms-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  acronyms-core errors (this file)                                      │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  acronyms-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP API errors (in apps/server)                                      │
//! │  └── ApiError         - What clients see (status + detail JSON)        │
//! │                                                                         │
//! │  Flow: ValidationError → ApiError (422)                                │
//! │        DbError         → ApiError (404/409/500)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when request input does not meet field or
/// pagination rules. They surface to clients as 422 responses before
/// any storage access happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Convenience type alias for Results with ValidationError.
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
            field: "abbreviation".to_string(),
        };
        assert_eq!(err.to_string(), "abbreviation is required");

        let err = ValidationError::TooLong {
            field: "phrase".to_string(),
            max: 300,
        };
        assert_eq!(err.to_string(), "phrase must be at most 300 characters");

        let err = ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 1,
            max: 50,
        };
        assert_eq!(err.to_string(), "limit must be between 1 and 50");
    }
}
