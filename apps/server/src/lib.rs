//! # Acronyms Server
//!
//! REST API for the Acronyms service.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Acronyms Server                                 │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  /api/acronym  │  │  /auth/*       │  │  Static site               ││
//! │  │                │  │  /users/me     │  │                            ││
//! │  │ • GET (cached) │  │ • register     │  │ • /            index.html ││
//! │  │ • POST         │  │ • login        │  │ • /favicon.ico             ││
//! │  │ • PUT          │  │ • logout       │  │ • /assets/*                ││
//! │  │ • DELETE       │  │ • me           │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Infrastructure                               │  │
//! │  │                                                                   │  │
//! │  │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────────────┐│  │
//! │  │  │   SQLite     │  │Response cache│  │  Argon2 + bearer tokens  ││  │
//! │  │  │              │  │              │  │                          ││  │
//! │  │  │ Primary data │  │ TTL, cleared │  │ DB-backed opaque tokens  ││  │
//! │  │  │ store        │  │ on any write │  │ SMTP welcome email       ││  │
//! │  │  └──────────────┘  └──────────────┘  └──────────────────────────┘│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `ACRONYMS_DATABASE` - SQLite database path (default: ./acronyms.db)
//! - `ACRONYMS_HOST` / `ACRONYMS_PORT` - bind address (default: 127.0.0.1:8000)
//! - `ACRONYMS_PAGE_SIZE` - default listing page size (default: 10)
//! - `ACRONYMS_CACHE_TTL_SECS` - response cache lifetime (default: 60)
//! - `ACRONYMS_TOKEN_LIFETIME_SECS` - bearer token lifetime (default: 3600)
//! - `ACRONYMS_DIST_DIR` - built frontend directory (default: dist)
//! - `ACRONYMS_SMTP_*` - welcome email relay (disabled by default)

pub mod auth;
pub mod cache;
pub mod config;
pub mod error;
pub mod mail;
pub mod routes;
pub mod site;
pub mod state;

// Re-exports
pub use config::Settings;
pub use error::ApiError;
pub use state::AppState;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;

/// Builds the complete application router.
///
/// Split out of `main` so tests can drive the exact production routing
/// without binding a socket.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/acronym",
            get(routes::acronyms::get_acronyms).post(routes::acronyms::post_acronym),
        )
        .route(
            "/acronym/{id}",
            put(routes::acronyms::put_acronym).delete(routes::acronyms::delete_acronym),
        );

    let auth = Router::new()
        .route("/register", post(routes::users::register))
        .route("/login", post(routes::users::login))
        .route("/logout", post(routes::users::logout));

    Router::new()
        .nest("/api", api)
        .nest("/auth", auth)
        .route("/users/me", get(routes::users::me))
        .merge(site::router(&state.settings.dist_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
