//! Vordr error types

/// Vordr error types
#[derive(Debug, thiserror::Error)]
pub enum VordrError {
    // Network errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// A manifest fetch failed during install.
    ///
    /// Install is all-or-nothing: a single failed fetch aborts the whole
    /// batch and the worker is not activated.
    #[error("install failed while precaching '{path}': {reason}")]
    Install { path: String, reason: String },

    /// A manifest fetch completed, but with a non-success status.
    ///
    /// Only the install handler treats this as an error; the fallback path
    /// passes any status through untouched.
    #[error("precache fetch for '{path}' returned status {status}")]
    PrecacheStatus { path: String, status: u16 },

    // Data errors
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),

    // Configuration errors
    #[error("no fetcher configured")]
    NoFetcher,

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type alias for vordr operations
pub type Result<T> = std::result::Result<T, VordrError>;
