//! OfflineWorker — the install handler and fetch interceptor.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures_util::future::try_join_all;
use tracing::{debug, warn};

use crate::cache::CacheStorage;
use crate::fetch::Fetch;
use crate::telemetry;
use crate::traits::{LifecycleState, ServiceWorker};
use crate::types::{Manifest, Request, Response};
use crate::{Result, VordrError};

/// Worker that serves cached snapshots and falls through to the network.
///
/// Stateless per invocation beyond the shared [`CacheStorage`]; the only
/// mutable state is the lifecycle flag flipped by
/// [`install`](ServiceWorker::install).
pub struct OfflineWorker {
    cache_name: String,
    manifest: Manifest,
    storage: Arc<CacheStorage>,
    fetcher: Arc<dyn Fetch>,
    state: RwLock<LifecycleState>,
}

impl std::fmt::Debug for OfflineWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfflineWorker")
            .field("cache_name", &self.cache_name)
            .field("manifest", &self.manifest)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl OfflineWorker {
    pub(crate) fn new(
        cache_name: String,
        manifest: Manifest,
        storage: Arc<CacheStorage>,
        fetcher: Arc<dyn Fetch>,
    ) -> Self {
        Self {
            cache_name,
            manifest,
            storage,
            fetcher,
            state: RwLock::new(LifecycleState::New),
        }
    }

    /// Name of this worker's cache store.
    pub fn cache_name(&self) -> &str {
        &self.cache_name
    }

    /// The precache manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The shared storage handle. Survives this worker; pass it to a
    /// successor built under a bumped cache name.
    pub fn storage(&self) -> Arc<CacheStorage> {
        Arc::clone(&self.storage)
    }

    fn set_state(&self, state: LifecycleState) {
        *self.state.write().expect("lifecycle lock poisoned") = state;
    }

    /// Fetch every manifest resource and write the snapshots into the
    /// named store.
    ///
    /// Fetches run concurrently; nothing is written until the whole batch
    /// has succeeded, so one failure aborts the install with the store's
    /// previous contents intact.
    async fn precache(&self) -> Result<()> {
        let store = self.storage.open(&self.cache_name);

        let fetches = self.manifest.iter().map(|path| async move {
            let request = Request::get(path);
            let response =
                self.fetcher
                    .fetch(&request)
                    .await
                    .map_err(|e| VordrError::Install {
                        path: path.to_string(),
                        reason: e.to_string(),
                    })?;
            if !response.is_success() {
                return Err(VordrError::PrecacheStatus {
                    path: path.to_string(),
                    status: response.status,
                });
            }
            Ok((request, response))
        });

        let snapshots = try_join_all(fetches).await?;
        let written = snapshots.len() as u64;
        for (request, response) in snapshots {
            store.put(&request, response);
        }

        metrics::counter!(telemetry::PRECACHED_TOTAL, "cache" => self.cache_name.clone())
            .increment(written);
        Ok(())
    }
}

#[async_trait]
impl ServiceWorker for OfflineWorker {
    async fn install(&self) -> Result<()> {
        debug!(
            cache = %self.cache_name,
            entries = self.manifest.len(),
            "installing"
        );

        match self.precache().await {
            Ok(()) => {
                self.set_state(LifecycleState::Active);
                metrics::counter!(
                    telemetry::INSTALLS_TOTAL,
                    "cache" => self.cache_name.clone(),
                    "status" => "ok"
                )
                .increment(1);
                Ok(())
            }
            Err(e) => {
                self.set_state(LifecycleState::Failed);
                metrics::counter!(
                    telemetry::INSTALLS_TOTAL,
                    "cache" => self.cache_name.clone(),
                    "status" => "error"
                )
                .increment(1);
                warn!(cache = %self.cache_name, error = %e, "install failed");
                Err(e)
            }
        }
    }

    async fn handle_fetch(&self, request: &Request) -> Result<Response> {
        // Unscoped: every open store, not just this worker's own.
        if let Some(response) = self.storage.match_request(request) {
            metrics::counter!(telemetry::CACHE_HITS_TOTAL).increment(1);
            debug!(url = %request.url, "served from cache");
            return Ok(response);
        }

        metrics::counter!(telemetry::CACHE_MISSES_TOTAL).increment(1);
        debug!(url = %request.url, "cache miss, falling through to network");

        let result = self.fetcher.fetch(request).await;
        let status = if result.is_ok() { "ok" } else { "error" };
        metrics::counter!(telemetry::FALLBACK_FETCHES_TOTAL, "status" => status).increment(1);
        result
    }

    fn state(&self) -> LifecycleState {
        *self.state.read().expect("lifecycle lock poisoned")
    }
}
