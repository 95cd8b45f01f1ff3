//! Core ServiceWorker trait

use async_trait::async_trait;

use crate::Result;
use crate::types::{Request, Response};

/// Lifecycle state of a worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Constructed, not yet installed.
    New,
    /// Install completed; eligible to intercept fetches.
    Active,
    /// Install failed; not active. The host may call `install` again.
    Failed,
}

/// The core worker trait.
///
/// Two event handlers wrapping the host's cache and network facilities.
/// The host awaits [`install`](ServiceWorker::install) before routing
/// fetches through the worker (the `waitUntil` contract) and calls
/// [`handle_fetch`](ServiceWorker::handle_fetch) for every request the
/// worker observes. Both handlers are stateless per invocation and safe to
/// call concurrently.
#[async_trait]
pub trait ServiceWorker: Send + Sync {
    /// Install-phase handler: precache the manifest into the named store.
    ///
    /// All-or-nothing: an `Err` means the worker must not be activated.
    /// The store may be left partially populated on failure.
    async fn install(&self) -> Result<()>;

    /// Fetch interception: the cached snapshot if any open store matches,
    /// otherwise the live network result — returned as-is and not cached.
    async fn handle_fetch(&self, request: &Request) -> Result<Response>;

    /// Current lifecycle state.
    fn state(&self) -> LifecycleState;

    /// Whether install has completed successfully.
    fn is_active(&self) -> bool {
        self.state() == LifecycleState::Active
    }
}
