//! HTTP route handlers.
//!
//! Handlers stay thin: parse and validate the request, call the
//! repositories, shape the response. Policy (filter semantics,
//! uniqueness, token lifetimes) lives in the core and db crates.

pub mod acronyms;
pub mod users;
