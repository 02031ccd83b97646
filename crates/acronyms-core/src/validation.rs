//! # Validation Module
//!
//! Input validation for the Acronyms service.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Axum extractors (Rust)                                       │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field and pagination rules                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL and CHECK constraints                                    │
//! │  └── UNIQUE (abbreviation, phrase)                                     │
//! │                                                                         │
//! │  Defense in depth: rule violations never reach storage                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use acronyms_core::validation::{validate_body, validate_limit};
//! use acronyms_core::AcronymBody;
//!
//! validate_limit(10).unwrap();
//! validate_body(&AcronymBody::new("AM", None, "Amplitude Modulation")).unwrap();
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::AcronymBody;
use crate::{MAX_ABBREVIATION_LENGTH, MAX_PAGE_SIZE, MAX_PHRASE_LENGTH};

// =============================================================================
// Field Validators
// =============================================================================

/// Validates an abbreviation.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 30 characters
///
/// ## Example
/// ```rust
/// use acronyms_core::validation::validate_abbreviation;
///
/// assert!(validate_abbreviation("DM").is_ok());
/// assert!(validate_abbreviation("").is_err());
/// assert!(validate_abbreviation(&"A".repeat(31)).is_err());
/// ```
pub fn validate_abbreviation(abbreviation: &str) -> ValidationResult<()> {
    if abbreviation.is_empty() {
        return Err(ValidationError::Required {
            field: "abbreviation".to_string(),
        });
    }

    if abbreviation.chars().count() > MAX_ABBREVIATION_LENGTH {
        return Err(ValidationError::TooLong {
            field: "abbreviation".to_string(),
            max: MAX_ABBREVIATION_LENGTH,
        });
    }

    Ok(())
}

/// Validates a phrase.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 300 characters
pub fn validate_phrase(phrase: &str) -> ValidationResult<()> {
    if phrase.is_empty() {
        return Err(ValidationError::Required {
            field: "phrase".to_string(),
        });
    }

    if phrase.chars().count() > MAX_PHRASE_LENGTH {
        return Err(ValidationError::TooLong {
            field: "phrase".to_string(),
            max: MAX_PHRASE_LENGTH,
        });
    }

    Ok(())
}

/// Validates a create/replace body as a unit.
///
/// The description is unconstrained; only abbreviation and phrase carry
/// length rules.
pub fn validate_body(body: &AcronymBody) -> ValidationResult<()> {
    validate_abbreviation(&body.abbreviation)?;
    validate_phrase(&body.phrase)?;
    Ok(())
}

// =============================================================================
// Pagination Validators
// =============================================================================

/// Validates a page size.
///
/// ## Rules
/// - Must be in `[1, 50]`
///
/// Requests outside the range are rejected, never clamped, so callers
/// cannot silently receive a different page size than they asked for.
pub fn validate_limit(limit: i64) -> ValidationResult<()> {
    if limit < 1 || limit > MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 1,
            max: MAX_PAGE_SIZE,
        });
    }

    Ok(())
}

/// Validates a pagination offset.
///
/// ## Rules
/// - Must be non-negative
///
/// An offset beyond the total row count is valid; it yields an empty
/// page rather than an error.
pub fn validate_offset(offset: i64) -> ValidationResult<()> {
    if offset < 0 {
        return Err(ValidationError::OutOfRange {
            field: "offset".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an acronym identifier.
///
/// ## Rules
/// - Must be non-negative
pub fn validate_id(id: i64) -> ValidationResult<()> {
    if id < 0 {
        return Err(ValidationError::OutOfRange {
            field: "id".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
