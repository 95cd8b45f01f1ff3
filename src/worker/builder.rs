//! Builder for configuring workers

use std::sync::Arc;
use std::time::Duration;

use super::OfflineWorker;
use crate::cache::{CacheStorage, StorageConfig};
use crate::fetch::{DEFAULT_TIMEOUT_SECS, Fetch, HttpFetcher};
use crate::types::Manifest;
use crate::{Result, VordrError};

/// Default cache-store name. Bump the version suffix to invalidate.
const DEFAULT_CACHE_NAME: &str = "vordr-cache-v1";

/// Main entry point for creating workers.
pub struct Vordr;

impl Vordr {
    /// Create a new builder for configuring a worker.
    pub fn builder() -> VordrBuilder {
        VordrBuilder::new()
    }
}

/// Builder for configuring workers.
pub struct VordrBuilder {
    cache_name: String,
    manifest: Option<Manifest>,
    precache_paths: Option<Vec<String>>,
    origin: Option<String>,
    fetcher: Option<Arc<dyn Fetch>>,
    storage: Option<Arc<CacheStorage>>,
    max_entries_per_store: Option<u64>,
    timeout_secs: Option<u64>,
}

impl std::fmt::Debug for VordrBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VordrBuilder")
            .field("cache_name", &self.cache_name)
            .field("manifest", &self.manifest)
            .field("precache_paths", &self.precache_paths)
            .field("origin", &self.origin)
            .field("max_entries_per_store", &self.max_entries_per_store)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl VordrBuilder {
    pub fn new() -> Self {
        Self {
            cache_name: DEFAULT_CACHE_NAME.to_string(),
            manifest: None,
            precache_paths: None,
            origin: None,
            fetcher: None,
            storage: None,
            max_entries_per_store: None,
            timeout_secs: None,
        }
    }

    /// Version-tagged cache-store name.
    ///
    /// Bumping this is the sole supported invalidation mechanism; the
    /// superseded store is not cleaned up automatically.
    pub fn cache_name(mut self, name: impl Into<String>) -> Self {
        self.cache_name = name.into();
        self
    }

    /// Set the precache manifest.
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Set the precache manifest from raw root-relative paths.
    ///
    /// Validated at [`build`](VordrBuilder::build) time.
    pub fn precache<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.precache_paths = Some(paths.into_iter().map(Into::into).collect());
        self
    }

    /// Origin the built-in HTTP fetcher resolves root-relative paths
    /// against (e.g. `https://example.org`).
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Inject a custom fetch implementation. Takes precedence over
    /// [`origin`](VordrBuilder::origin).
    pub fn fetcher(mut self, fetcher: Arc<dyn Fetch>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    /// Share cache storage with other workers, e.g. a previous version.
    pub fn storage(mut self, storage: Arc<CacheStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Capacity bound per cache store (default: 10,000 entries).
    pub fn max_entries_per_store(mut self, n: u64) -> Self {
        self.max_entries_per_store = Some(n);
        self
    }

    /// Timeout for the built-in HTTP fetcher, in seconds (default: 30).
    pub fn timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Build the worker.
    pub fn build(self) -> Result<OfflineWorker> {
        if self.cache_name.is_empty() {
            return Err(VordrError::Configuration(
                "cache name must not be empty".into(),
            ));
        }

        let manifest = match (self.manifest, self.precache_paths) {
            (Some(manifest), _) => manifest,
            (None, Some(paths)) => Manifest::new(paths)?,
            (None, None) => Manifest::default(),
        };

        let fetcher: Arc<dyn Fetch> = match (self.fetcher, self.origin) {
            (Some(fetcher), _) => fetcher,
            (None, Some(origin)) => {
                let timeout =
                    Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
                Arc::new(HttpFetcher::with_timeout(origin, timeout))
            }
            (None, None) => return Err(VordrError::NoFetcher),
        };

        let storage = self.storage.unwrap_or_else(|| {
            let mut config = StorageConfig::new();
            if let Some(max) = self.max_entries_per_store {
                config = config.max_entries_per_store(max);
            }
            Arc::new(CacheStorage::with_config(config))
        });

        Ok(OfflineWorker::new(
            self.cache_name,
            manifest,
            storage,
            fetcher,
        ))
    }
}

impl Default for VordrBuilder {
    fn default() -> Self {
        Self::new()
    }
}
