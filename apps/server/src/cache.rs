//! Response cache for listing and lookup results.
//!
//! ## Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Response Cache                                    │
//! │                                                                         │
//! │  GET handler                                                           │
//! │    │  get("acronyms:abbreviation=DM&...")                              │
//! │    ├── hit (fresh)  → respond without touching storage                 │
//! │    └── miss/stale   → query storage, put(key, value, ttl)              │
//! │                                                                         │
//! │  POST/PUT/DELETE handler (on success)                                  │
//! │    └── clear_namespace("acronyms") → every cached read is dropped      │
//! │                                                                         │
//! │  Invalidation is all-or-nothing on purpose: writes are rare and        │
//! │  a full namespace clear means no reader ever sees a stale row or       │
//! │  has to reconcile a partial invalidation.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cache is an explicit component invoked by the handlers, not a
//! decorator around them, so the call sites show exactly when storage
//! is bypassed.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

/// Namespace for all acronym listing/lookup responses.
pub const ACRONYMS_NAMESPACE: &str = "acronyms";

/// A cached successful GET response.
#[derive(Debug, Clone)]
pub struct CachedResponse {
    /// The JSON body exactly as it was first served.
    pub body: Value,

    /// Pre-pagination total for listing responses (`X-Total-Count`);
    /// `None` for single-acronym lookups.
    pub total_count: Option<i64>,
}

/// Entries expire at an instant rather than carrying a per-read TTL.
#[derive(Debug)]
struct Entry {
    expires_at: Instant,
    value: CachedResponse,
}

/// Namespace-scoped, time-expiring response cache.
///
/// Shared mutable state across all requests; the only mutation
/// discipline is "clear the whole namespace on any successful write".
#[derive(Debug, Clone, Default)]
pub struct ResponseCache {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl ResponseCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        ResponseCache::default()
    }

    /// Builds a namespaced cache key.
    pub fn key(namespace: &str, request: &str) -> String {
        format!("{namespace}:{request}")
    }

    /// Returns the cached value for a key, if present and fresh.
    pub async fn get(&self, key: &str) -> Option<CachedResponse> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                debug!(key, "Cache hit");
                Some(entry.value.clone())
            }
            // Stale entries are left for the next put/clear to overwrite;
            // they are never served.
            _ => None,
        }
    }

    /// Stores a value under a key for `ttl`.
    pub async fn put(&self, key: String, value: CachedResponse, ttl: Duration) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            Entry {
                expires_at: Instant::now() + ttl,
                value,
            },
        );
    }

    /// Drops every entry in a namespace.
    pub async fn clear_namespace(&self, namespace: &str) {
        let prefix = format!("{namespace}:");
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|key, _| !key.starts_with(&prefix));
        debug!(
            namespace,
            cleared = before - entries.len(),
            "Cleared cache namespace"
        );
    }

    /// Number of entries currently held (for diagnostics).
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the cache currently holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
