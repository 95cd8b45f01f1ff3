//! Vordr — service-worker style offline cache for static assets.
//!
//! A worker pre-populates a version-tagged cache store with a fixed
//! manifest of resources at install time, then answers intercepted fetches
//! from cache when a snapshot exists and falls through to the network
//! otherwise. Fallback results are never cached; the sole invalidation
//! mechanism is bumping the cache-store name.
//!
//! # Example
//!
//! ```rust,no_run
//! use vordr::{Request, ServiceWorker, Vordr};
//!
//! #[tokio::main]
//! async fn main() -> vordr::Result<()> {
//!     let worker = Vordr::builder()
//!         .cache_name("app-cache-v1")
//!         .origin("https://example.org")
//!         .precache(["/", "/index.html", "/publications.csv", "/assets/logo.png"])
//!         .build()?;
//!
//!     // The host awaits install before routing fetches through the worker.
//!     worker.install().await?;
//!
//!     // Served from the store populated above; no network traffic.
//!     let response = worker.handle_fetch(&Request::get("/index.html")).await?;
//!     println!("{} ({} bytes)", response.status, response.body.len());
//!     Ok(())
//! }
//! ```
//!
//! # Versioned stores
//!
//! Opening a worker under a new cache name yields a fresh, empty store;
//! the superseded store stays in place (and, because lookups are unscoped
//! across all open stores, its entries are still served) until the host
//! calls [`CacheStorage::delete`].

pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod telemetry;
pub mod traits;
pub mod types;
pub mod worker;

// Re-export main types at crate root
pub use error::{Result, VordrError};
pub use traits::{LifecycleState, ServiceWorker};
pub use worker::{OfflineWorker, Vordr, VordrBuilder};

pub use cache::{CacheStorage, CacheStore, StorageConfig};
pub use config::Config;
pub use fetch::{Fetch, HttpFetcher};
pub use types::{Manifest, Method, Request, Response};
