//! # acronyms-db: Database Layer for the Acronyms Service
//!
//! This crate provides database access for the Acronyms service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Acronyms Data Flow                               │
//! │                                                                         │
//! │  Axum handler (GET /api/acronym)                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    acronyms-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (acronym.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ AcronymRepo   │    │ 001_acronyms │  │   │
//! │  │   │ Connection    │◄───│ UserRepo      │    │ 002_users    │  │   │
//! │  │   │ Management    │    │ TokenRepo     │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (./acronyms.db)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (acronym, user, token)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use acronyms_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./acronyms.db")).await?;
//! let (page, total) = db.acronyms().search(&query).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::acronym::AcronymRepository;
pub use repository::user::{AccessToken, AccessTokenRepository, User, UserRepository};
