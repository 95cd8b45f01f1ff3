//! Caching subsystem.
//!
//! Two layers:
//!
//! - [`CacheStore`] — a single named store mapping request identity to a
//!   stored [`Response`] snapshot, backed by a bounded moka cache.
//!
//! - [`CacheStorage`] — the registry of named stores. [`CacheStorage::open`]
//!   is idempotent (creates if missing, reuses if present), and lookups via
//!   [`CacheStorage::match_request`] are deliberately **unscoped**: every
//!   open store is consulted in creation order, so entries written under a
//!   previous cache-name version are still served until their store is
//!   explicitly deleted.
//!
//! Superseded stores are never cleaned up automatically. Bumping the store
//! name leaves the old store in place; hosts that want the space back call
//! [`CacheStorage::delete`].

mod store;

pub use store::CacheStore;

use std::sync::{Arc, RwLock};

use crate::types::{Request, Response};

/// Configuration for cache storage.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Maximum number of entries per store. Default: 10,000.
    pub max_entries_per_store: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            max_entries_per_store: store::DEFAULT_MAX_ENTRIES,
        }
    }
}

impl StorageConfig {
    /// Create a new config with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of entries per store.
    pub fn max_entries_per_store(mut self, n: u64) -> Self {
        self.max_entries_per_store = n;
        self
    }
}

/// Registry of named cache stores.
///
/// Shared across worker versions via `Arc`; stores live as long as the
/// storage handle the host holds, surviving the worker that created them.
pub struct CacheStorage {
    config: StorageConfig,
    stores: RwLock<Vec<Arc<CacheStore>>>,
}

impl CacheStorage {
    /// Create empty storage with the default configuration.
    pub fn new() -> Self {
        Self::with_config(StorageConfig::default())
    }

    /// Create empty storage with a custom configuration.
    pub fn with_config(config: StorageConfig) -> Self {
        Self {
            config,
            stores: RwLock::new(Vec::new()),
        }
    }

    /// Open a store by name, creating it if absent.
    ///
    /// Idempotent: reopening an existing name returns the same store; a
    /// name not seen before always yields a fresh, empty store.
    pub fn open(&self, name: &str) -> Arc<CacheStore> {
        let mut stores = self.stores.write().expect("cache storage lock poisoned");
        if let Some(store) = stores.iter().find(|s| s.name() == name) {
            return Arc::clone(store);
        }
        let store = Arc::new(CacheStore::new(name, self.config.max_entries_per_store));
        stores.push(Arc::clone(&store));
        store
    }

    /// Look up an already-open store by name, without creating one.
    pub fn get(&self, name: &str) -> Option<Arc<CacheStore>> {
        let stores = self.stores.read().expect("cache storage lock poisoned");
        stores.iter().find(|s| s.name() == name).map(Arc::clone)
    }

    /// Unscoped lookup: consult every open store in creation order and
    /// return the first matching snapshot.
    ///
    /// Not restricted to any single worker's store, so snapshots from a
    /// prior version's store are found until that store is deleted.
    pub fn match_request(&self, request: &Request) -> Option<Response> {
        let stores = self.stores.read().expect("cache storage lock poisoned");
        stores.iter().find_map(|s| s.matching(request))
    }

    /// Delete a named store, dropping all of its entries.
    ///
    /// Returns `true` if a store was removed. Never called by the library
    /// itself; without it, superseded version stores accumulate.
    pub fn delete(&self, name: &str) -> bool {
        let mut stores = self.stores.write().expect("cache storage lock poisoned");
        let before = stores.len();
        stores.retain(|s| s.name() != name);
        stores.len() < before
    }

    /// Names of all open stores, in creation order.
    pub fn store_names(&self) -> Vec<String> {
        let stores = self.stores.read().expect("cache storage lock poisoned");
        stores.iter().map(|s| s.name().to_string()).collect()
    }
}

impl Default for CacheStorage {
    fn default() -> Self {
        Self::new()
    }
}
