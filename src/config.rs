//! Configuration loading.
//!
//! Configuration is loaded from TOML files with the following resolution
//! order:
//! 1. explicit path (e.g. from a host flag)
//! 2. `~/.vordr/config.toml` (user)
//! 3. `/etc/vordr/config.toml` (system)
//!
//! ```toml
//! [worker]
//! cache_name = "vordr-cache-v1"
//! origin = "https://example.org"
//! precache = ["/", "/index.html", "/publications.csv", "/assets/logo.png"]
//!
//! [limits]
//! max_entries_per_store = 10000
//! request_timeout_secs = 30
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::types::Manifest;
use crate::worker::{Vordr, VordrBuilder};

/// Worker configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub worker: WorkerConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Worker identity and manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Version-tagged cache-store name (default: "vordr-cache-v1").
    #[serde(default = "default_cache_name")]
    pub cache_name: String,
    /// Origin the built-in fetcher resolves root-relative paths against.
    #[serde(default)]
    pub origin: Option<String>,
    /// Root-relative paths precached at install.
    #[serde(default)]
    pub precache: Vec<String>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_name: default_cache_name(),
            origin: None,
            precache: Vec::new(),
        }
    }
}

fn default_cache_name() -> String {
    "vordr-cache-v1".to_string()
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Maximum entries per cache store (default: 10,000).
    #[serde(default = "default_max_entries")]
    pub max_entries_per_store: u64,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_entries_per_store: default_max_entries(),
            request_timeout_secs: default_timeout(),
        }
    }
}

fn default_max_entries() -> u64 {
    10_000
}

fn default_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration, trying the resolution order documented above.
    ///
    /// Falls back to the built-in defaults when no file is found and no
    /// explicit path was given.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        for candidate in Self::candidate_paths() {
            if candidate.exists() {
                return Self::from_file(&candidate);
            }
        }
        Ok(Self::default())
    }

    /// Parse configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".vordr").join("config.toml"));
        }
        paths.push(PathBuf::from("/etc/vordr/config.toml"));
        paths
    }

    /// Turn the configuration into a ready-to-build worker builder.
    ///
    /// Manifest paths are validated here; the caller may still override
    /// builder settings (e.g. inject a custom fetcher) before building.
    pub fn into_builder(self) -> Result<VordrBuilder> {
        let manifest = Manifest::new(self.worker.precache)?;
        let mut builder = Vordr::builder()
            .cache_name(self.worker.cache_name)
            .manifest(manifest)
            .max_entries_per_store(self.limits.max_entries_per_store)
            .timeout(self.limits.request_timeout_secs);
        if let Some(origin) = self.worker.origin {
            builder = builder.origin(origin);
        }
        Ok(builder)
    }
}
