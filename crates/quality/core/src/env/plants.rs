//! Plant-definition catalog lookup.

use crate::item::ItemDefId;

/// Queries the host's plant-definition catalog by harvested product.
///
/// The level resolver deducts the steepest sow-skill threshold among all
/// plants whose harvest matches the produced item. Implementations may scan
/// the catalog per call or precompute a reverse index; both are
/// observationally identical (the `quality-content` catalog caches).
pub trait PlantOracle: Send + Sync {
    /// Maximum sow-skill minimum among plant definitions whose harvested
    /// product is `harvested`, or `None` when no plant yields it.
    fn max_sow_skill(&self, harvested: ItemDefId) -> Option<i32>;
}
