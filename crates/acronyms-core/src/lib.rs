//! # acronyms-core: Pure Business Logic for the Acronyms Service
//!
//! This crate is the **heart** of the Acronyms service. It contains the
//! domain model and the query/filter/paginate contract as pure code with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Acronyms Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Axum Handlers (apps/server)                  │   │
//! │  │    GET/POST/PUT/DELETE /api/acronym, /auth/*, /users/me        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ acronyms-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   query   │  │ validation│                  │   │
//! │  │   │  Acronym  │  │ SortColumn│  │   rules   │                  │   │
//! │  │   │   Body    │  │  Filter   │  │  checks   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  acronyms-db (Database Layer)                   │   │
//! │  │            SQLite queries, migrations, repositories             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Acronym, AcronymBody)
//! - [`query`] - Filter/sort/pagination model for listing requests
//! - [`error`] - Validation error types
//! - [`validation`] - Field and pagination rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod query;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use acronyms_core::Acronym` instead of
// `use acronyms_core::types::Acronym`

pub use error::ValidationError;
pub use query::{AcronymQuery, SortColumn};
pub use types::{Acronym, AcronymBody};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an abbreviation, in characters.
pub const MAX_ABBREVIATION_LENGTH: usize = 30;

/// Maximum length of a phrase, in characters.
pub const MAX_PHRASE_LENGTH: usize = 300;

/// Maximum page size a listing request may ask for.
///
/// Requests outside `[1, MAX_PAGE_SIZE]` are rejected before reaching
/// storage rather than silently clamped.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Page size used when a listing request does not supply `limit`.
///
/// Settings may override this per deployment; this is the fallback.
pub const DEFAULT_PAGE_SIZE: i64 = 10;
