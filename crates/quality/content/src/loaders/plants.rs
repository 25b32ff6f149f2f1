//! Plant catalog loader.
//!
//! The catalog is the reverse index the resolver's sow-skill deduction
//! queries: harvested product to the steepest sow-skill minimum among the
//! plants that yield it. Precomputing the index at load time is
//! observationally identical to scanning every plant definition per call.

use std::collections::HashMap;
use std::path::Path;

use quality_core::{ItemDefId, PlantOracle};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One plant definition as it appears in RON files.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlantEntry {
    /// Product this plant yields when harvested.
    pub harvested: ItemDefId,
    /// Minimum growing skill required to sow the plant.
    pub sow_min_skill: i32,
}

/// Plant catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PlantCatalogSpec {
    plants: Vec<PlantEntry>,
}

/// Cached sow-skill index over a set of plant definitions.
///
/// Implements [`PlantOracle`]; several plants may share a harvested product
/// and the index keeps the maximum sow-skill minimum among them.
#[derive(Debug, Clone, Default)]
pub struct PlantCatalog {
    max_sow_skill: HashMap<ItemDefId, i32>,
}

impl PlantCatalog {
    /// Build a catalog from plant entries.
    pub fn from_entries(entries: impl IntoIterator<Item = PlantEntry>) -> Self {
        let mut max_sow_skill: HashMap<ItemDefId, i32> = HashMap::new();
        for entry in entries {
            max_sow_skill
                .entry(entry.harvested)
                .and_modify(|skill| *skill = (*skill).max(entry.sow_min_skill))
                .or_insert(entry.sow_min_skill);
        }
        Self { max_sow_skill }
    }

    /// Number of distinct harvested products in the catalog.
    pub fn len(&self) -> usize {
        self.max_sow_skill.len()
    }

    pub fn is_empty(&self) -> bool {
        self.max_sow_skill.is_empty()
    }
}

impl PlantOracle for PlantCatalog {
    fn max_sow_skill(&self, harvested: ItemDefId) -> Option<i32> {
        self.max_sow_skill.get(&harvested).copied()
    }
}

/// Loader for plant catalogs from RON files.
pub struct PlantLoader;

impl PlantLoader {
    /// Load a plant catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing the plant catalog
    ///
    /// # Returns
    ///
    /// Returns a PlantCatalog implementing PlantOracle.
    pub fn load(path: &Path) -> LoadResult<PlantCatalog> {
        Self::from_ron_str(&read_file(path)?)
    }

    /// Parse a plant catalog from a RON string.
    pub fn from_ron_str(content: &str) -> LoadResult<PlantCatalog> {
        let spec: PlantCatalogSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse plant catalog RON: {}", e))?;
        Ok(PlantCatalog::from_entries(spec.plants))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_the_steepest_requirement_per_product() {
        let catalog = PlantCatalog::from_entries([
            PlantEntry {
                harvested: ItemDefId(12),
                sow_min_skill: 8,
            },
            PlantEntry {
                harvested: ItemDefId(12),
                sow_min_skill: 5,
            },
            PlantEntry {
                harvested: ItemDefId(30),
                sow_min_skill: 0,
            },
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.max_sow_skill(ItemDefId(12)), Some(8));
        assert_eq!(catalog.max_sow_skill(ItemDefId(30)), Some(0));
        assert_eq!(catalog.max_sow_skill(ItemDefId(99)), None);
    }

    #[test]
    fn ron_catalog_round_trip() {
        let ron = r#"
            (
                plants: [
                    (harvested: 12, sow_min_skill: 8),
                    (harvested: 30, sow_min_skill: 4),
                ],
            )
        "#;
        let catalog = PlantLoader::from_ron_str(ron).unwrap();
        assert_eq!(catalog.max_sow_skill(ItemDefId(12)), Some(8));
        assert_eq!(catalog.max_sow_skill(ItemDefId(30)), Some(4));
    }

    #[test]
    fn malformed_ron_is_rejected() {
        let error = PlantLoader::from_ron_str("plants: oops").unwrap_err();
        assert!(error.to_string().contains("Failed to parse plant catalog RON"));
    }
}
