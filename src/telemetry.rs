//! Telemetry metric name constants.
//!
//! Centralised metric names for vordr operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `vordr_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `cache` — cache-store name (the version tag)
//! - `status` — outcome: "ok" or "error"

/// Total install attempts.
///
/// Labels: `cache`, `status` ("ok" | "error").
pub const INSTALLS_TOTAL: &str = "vordr_installs_total";

/// Total resource snapshots written during precache.
///
/// Labels: `cache`.
pub const PRECACHED_TOTAL: &str = "vordr_precached_total";

/// Total intercepted fetches answered from a cache store.
pub const CACHE_HITS_TOTAL: &str = "vordr_cache_hits_total";

/// Total intercepted fetches that missed every open cache store.
pub const CACHE_MISSES_TOTAL: &str = "vordr_cache_misses_total";

/// Total fallback network fetches performed after a cache miss.
///
/// Labels: `status` ("ok" | "error").
pub const FALLBACK_FETCHES_TOTAL: &str = "vordr_fallback_fetches_total";
