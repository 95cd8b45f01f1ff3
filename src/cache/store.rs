//! Single named cache store.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use moka::sync::Cache;

use crate::types::{Request, Response};

/// Default maximum number of entries per store.
pub(crate) const DEFAULT_MAX_ENTRIES: u64 = 10_000;

/// A named cache store: request identity → response snapshot.
///
/// Written during install, read-only thereafter. Thread-safe; there is no
/// per-entry invalidation — a store is superseded wholesale by opening a
/// new name.
pub struct CacheStore {
    name: String,
    entries: Cache<u64, Response>,
}

impl CacheStore {
    pub(crate) fn new(name: impl Into<String>, max_entries: u64) -> Self {
        Self {
            name: name.into(),
            entries: Cache::new(max_entries),
        }
    }

    /// Store name (the version-tagged identifier).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Store a snapshot under the request's identity, overwriting any
    /// previous snapshot for an equivalent request.
    pub fn put(&self, request: &Request, response: Response) {
        self.entries.insert(request_key(request), response);
    }

    /// Look up the snapshot stored for an equivalent request.
    ///
    /// Returns `None` on a miss.
    pub fn matching(&self, request: &Request) -> Option<Response> {
        self.entries.get(&request_key(request))
    }

    /// Number of entries currently in the store.
    ///
    /// Flushes moka's pending maintenance tasks first; `entry_count` lags
    /// recent writes otherwise.
    pub fn len(&self) -> u64 {
        self.entries.run_pending_tasks();
        self.entries.entry_count()
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compute a request's cache key from its method and URL.
///
/// Uses `DefaultHasher` (SipHash); deterministic within a process lifetime,
/// which is all an in-process store needs.
fn request_key(request: &Request) -> u64 {
    let mut hasher = DefaultHasher::new();
    request.method.hash(&mut hasher);
    request.url.hash(&mut hasher);
    hasher.finish()
}
