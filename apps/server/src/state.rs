//! Shared application state.

use std::sync::Arc;

use acronyms_db::Database;

use crate::cache::ResponseCache;
use crate::config::Settings;
use crate::mail::Mailer;

/// State handed to every handler.
///
/// Cloning is cheap: the database wraps a connection pool, the cache
/// an `Arc`, and settings are shared behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: ResponseCache,
    pub settings: Arc<Settings>,
    pub mailer: Mailer,
}

impl AppState {
    pub fn new(db: Database, settings: Settings) -> Self {
        let mailer = Mailer::new(&settings.smtp);
        AppState {
            db,
            cache: ResponseCache::new(),
            settings: Arc::new(settings),
            mailer,
        }
    }
}
