//! Precache manifest

use serde::Deserialize;

use crate::{Result, VordrError};

/// The fixed, ordered list of root-relative resource paths precached at
/// install.
///
/// Immutable after construction. Changing the deployed asset set means
/// building a new manifest — and typically bumping the cache-store name so
/// the new snapshots land in a fresh store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Manifest {
    paths: Vec<String>,
}

impl Manifest {
    /// Build a manifest, validating that every path is root-relative.
    pub fn new<I, S>(paths: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        for path in &paths {
            if !path.starts_with('/') {
                return Err(VordrError::InvalidManifest(format!(
                    "path '{path}' is not root-relative"
                )));
            }
        }
        Ok(Self { paths })
    }

    /// The manifest paths, in precache order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Iterate over the paths in precache order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

impl TryFrom<Vec<String>> for Manifest {
    type Error = VordrError;

    fn try_from(paths: Vec<String>) -> Result<Self> {
        Self::new(paths)
    }
}
