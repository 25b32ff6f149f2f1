//! Data-driven configuration and catalogs for the quality resolver.
//!
//! This crate houses the host-facing data surface of `quality-core`:
//! - Policy settings (data-driven via TOML)
//! - Plant catalogs (data-driven via RON), exposed as a cached
//!   [`quality_core::PlantOracle`] implementation
//!
//! Content is consumed by host oracles and never appears in resolver state.
//! All loaders use quality-core types directly with serde deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{PlantCatalog, PlantEntry, PlantLoader, PolicyLoader};
