//! Static frontend serving.
//!
//! The built single-page frontend lives in a `dist/` directory
//! (`ACRONYMS_DIST_DIR`): `index.html` at the root, a `favicon.ico`,
//! and hashed bundles under `assets/`. The API owns `/api` and `/auth`;
//! everything here is plain files.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Routes for the frontend files.
pub fn router(dist_dir: &Path) -> Router<AppState> {
    Router::new()
        .route_service("/", ServeFile::new(dist_dir.join("index.html")))
        .route_service("/favicon.ico", ServeFile::new(dist_dir.join("favicon.ico")))
        .nest_service("/assets", ServeDir::new(dist_dir.join("assets")))
}
