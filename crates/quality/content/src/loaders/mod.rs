//! Content loaders for reading resolver data from files.
//!
//! Loaders convert TOML/RON files into quality-core types and oracle
//! implementations, validating preconditions on the way in so the resolver
//! never sees malformed configuration.

pub mod plants;
pub mod policy;

pub use plants::{PlantCatalog, PlantEntry, PlantLoader};
pub use policy::PolicyLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
