//! # Repository Module
//!
//! Database repository implementations for the Acronyms service.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Axum handler                                                          │
//! │       │                                                                 │
//! │       │  db.acronyms().search(&query)                                  │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  AcronymRepository                                                     │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── search(&self, query)                                              │
//! │  ├── insert(&self, body)                                               │
//! │  ├── replace(&self, id, body)                                          │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • Handlers never build SQL strings                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`acronym::AcronymRepository`] - Acronym CRUD and filtered listing
//! - [`user::UserRepository`] - User accounts for the auth layer
//! - [`user::AccessTokenRepository`] - Database-backed bearer tokens

pub mod acronym;
pub mod user;
