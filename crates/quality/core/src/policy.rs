//! Policy configuration: per-category quality bounds and global toggles.
//!
//! `PolicySettings` is owned and persisted by the host (see the
//! `quality-content` loaders); the resolver treats it as an immutable value
//! passed into every call, so tests can vary policy without shared fixtures.

use crate::item::ItemCategory;
use crate::quality::{Quality, QualityRange};

/// Quality bounds for one item category.
///
/// Unenforced bounds are skipped entirely during range resolution: the
/// category's rule falls through to the next one in precedence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategoryBounds {
    pub enforced: bool,
    pub min: Quality,
    pub max: Quality,
}

impl CategoryBounds {
    /// Bounds that restrict the category to `[min, max]`.
    pub const fn enforced(min: Quality, max: Quality) -> Self {
        Self {
            enforced: true,
            min,
            max,
        }
    }

    /// Bounds that are present in configuration but not applied.
    pub const fn unenforced() -> Self {
        Self {
            enforced: false,
            min: Quality::MIN,
            max: Quality::MAX,
        }
    }

    /// The admissible range, or `None` when these bounds are not enforced.
    pub fn range(&self) -> Option<QualityRange> {
        self.enforced.then(|| QualityRange::new(self.min, self.max))
    }
}

impl Default for CategoryBounds {
    fn default() -> Self {
        Self::unenforced()
    }
}

/// Host-owned configuration read by the resolver.
///
/// One [`CategoryBounds`] per category in [`ItemCategory::PRECEDENCE`], plus
/// the global toggles and the standard supply-quality baseline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicySettings {
    pub stuff: CategoryBounds,
    pub work_table: CategoryBounds,
    pub security: CategoryBounds,
    pub building: CategoryBounds,
    pub drug: CategoryBounds,
    pub medicine: CategoryBounds,
    pub meal: CategoryBounds,
    pub tasty_ingestible: CategoryBounds,
    pub nutritive_ingestible: CategoryBounds,
    pub weapon: CategoryBounds,
    pub apparel: CategoryBounds,
    pub shell: CategoryBounds,
    pub manufactured: CategoryBounds,

    /// Deduct recipe/sow/construction skill thresholds from the level.
    pub use_skill_requirements: bool,
    /// Let consumed material quality influence the level.
    pub use_material_quality: bool,
    /// Let workstation quality influence the level.
    pub use_table_quality: bool,
    /// Route stone-block cutting to the crafting skill.
    pub skilled_stonecutting: bool,
    /// Give butchered products (meat/leather) skill-based quality instead of
    /// the random fallback.
    pub skilled_butchering: bool,
    /// Baseline supply quality; supplies above it raise the level, below it
    /// lower it.
    pub standard_supply_quality: Quality,
}

impl Default for PolicySettings {
    /// Out-of-the-box behavior: weapons, apparel, and manufactured goods are
    /// bounded by the full scale (their rules always match), every other
    /// category is unrestricted, and all global toggles are on.
    fn default() -> Self {
        Self {
            stuff: CategoryBounds::unenforced(),
            work_table: CategoryBounds::unenforced(),
            security: CategoryBounds::unenforced(),
            building: CategoryBounds::unenforced(),
            drug: CategoryBounds::unenforced(),
            medicine: CategoryBounds::unenforced(),
            meal: CategoryBounds::unenforced(),
            tasty_ingestible: CategoryBounds::unenforced(),
            nutritive_ingestible: CategoryBounds::unenforced(),
            weapon: CategoryBounds::enforced(Quality::MIN, Quality::MAX),
            apparel: CategoryBounds::enforced(Quality::MIN, Quality::MAX),
            shell: CategoryBounds::unenforced(),
            manufactured: CategoryBounds::enforced(Quality::MIN, Quality::MAX),
            use_skill_requirements: true,
            use_material_quality: true,
            use_table_quality: true,
            skilled_stonecutting: true,
            skilled_butchering: true,
            standard_supply_quality: Quality::Normal,
        }
    }
}

impl PolicySettings {
    /// Bounds configured for `category`, or `None` for the unrestricted
    /// fall-through category.
    pub fn bounds(&self, category: ItemCategory) -> Option<&CategoryBounds> {
        match category {
            ItemCategory::Stuff => Some(&self.stuff),
            ItemCategory::WorkTable => Some(&self.work_table),
            ItemCategory::SecurityBuilding => Some(&self.security),
            ItemCategory::Building => Some(&self.building),
            ItemCategory::Drug => Some(&self.drug),
            ItemCategory::Medicine => Some(&self.medicine),
            ItemCategory::Meal => Some(&self.meal),
            ItemCategory::TastyIngestible => Some(&self.tasty_ingestible),
            ItemCategory::NutritiveIngestible => Some(&self.nutritive_ingestible),
            ItemCategory::Weapon => Some(&self.weapon),
            ItemCategory::Apparel => Some(&self.apparel),
            ItemCategory::Shell => Some(&self.shell),
            ItemCategory::Manufactured => Some(&self.manufactured),
            ItemCategory::Other => None,
        }
    }

    /// True when either supply-quality influence toggle is on.
    pub fn supply_quality_enabled(&self) -> bool {
        self.use_material_quality || self.use_table_quality
    }

    /// Fail-fast precondition check: every enforced category must satisfy
    /// `min <= max`.
    ///
    /// The resolver assumes this holds and does not re-validate per call;
    /// run this once wherever settings enter the system (the
    /// `quality-content` loader does).
    pub fn validate(&self) -> Result<(), PolicyError> {
        for category in ItemCategory::PRECEDENCE {
            if let Some(bounds) = self.bounds(category)
                && bounds.enforced
                && bounds.min > bounds.max
            {
                return Err(PolicyError::InvertedBounds {
                    category,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }
        Ok(())
    }
}

/// Configuration precondition violations surfaced by
/// [`PolicySettings::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// An enforced category has `min > max`.
    #[error("{category} bounds are inverted: min {min} > max {max}")]
    InvertedBounds {
        category: ItemCategory,
        min: Quality,
        max: Quality,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_validate() {
        assert_eq!(PolicySettings::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let mut policy = PolicySettings::default();
        policy.meal = CategoryBounds::enforced(Quality::Masterwork, Quality::Poor);
        assert_eq!(
            policy.validate(),
            Err(PolicyError::InvertedBounds {
                category: ItemCategory::Meal,
                min: Quality::Masterwork,
                max: Quality::Poor,
            })
        );
    }

    #[test]
    fn inverted_bounds_are_tolerated_when_unenforced() {
        let mut policy = PolicySettings::default();
        policy.drug = CategoryBounds {
            enforced: false,
            min: Quality::Legendary,
            max: Quality::Awful,
        };
        assert_eq!(policy.validate(), Ok(()));
    }

    #[test]
    fn every_precedence_category_has_bounds() {
        let policy = PolicySettings::default();
        for category in ItemCategory::PRECEDENCE {
            assert!(policy.bounds(category).is_some(), "{category} missing");
        }
        assert!(policy.bounds(ItemCategory::Other).is_none());
    }
}
