//! # Domain Types
//!
//! Core domain types for the Acronyms service.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      Acronym        │        │    AcronymBody      │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (i64, storage)  │        │  abbreviation       │                │
//! │  │  abbreviation       │   ◄──  │  description?       │                │
//! │  │  description?       │        │  phrase             │                │
//! │  │  phrase             │        │  (create/replace)   │                │
//! │  └─────────────────────┘        └─────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The id is assigned by storage on insert and immutable afterwards.
//! `AcronymBody` is the write-side view: it carries the three mutable
//! fields as a unit, because a PUT replaces them together.

use serde::{Deserialize, Serialize};

// =============================================================================
// Acronym
// =============================================================================

/// A stored abbreviation/phrase pair.
///
/// ## Invariant
/// The pair `(abbreviation, phrase)` is unique across all rows. Two
/// acronyms may share an abbreviation with different phrases, e.g.
/// "DM" -> "Data Mining" and "DM" -> "Direct Message".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Acronym {
    /// Storage-assigned identifier. Coincides with insertion order.
    pub id: i64,

    /// The abbreviation, 1-30 characters.
    pub abbreviation: String,

    /// Optional free-form definition.
    pub description: Option<String>,

    /// The expanded phrase, 1-300 characters.
    pub phrase: String,
}

// =============================================================================
// AcronymBody
// =============================================================================

/// Request body for creating or replacing an acronym.
///
/// ## Usage
/// - `POST /api/acronym` inserts a new row from this body
/// - `PUT /api/acronym/{id}` replaces all three fields of an existing row
///
/// Partial updates are not supported; the triple always travels together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcronymBody {
    /// The abbreviation, 1-30 characters.
    pub abbreviation: String,

    /// Optional free-form definition.
    #[serde(default)]
    pub description: Option<String>,

    /// The expanded phrase, 1-300 characters.
    pub phrase: String,
}

impl AcronymBody {
    /// Creates a body from its parts.
    pub fn new(
        abbreviation: impl Into<String>,
        description: Option<String>,
        phrase: impl Into<String>,
    ) -> Self {
        AcronymBody {
            abbreviation: abbreviation.into(),
            description,
            phrase: phrase.into(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
