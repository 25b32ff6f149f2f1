//! Range resolution: which quality band a production is allowed to land in.
//!
//! Dispatch is an explicit ordered rule table ([`ItemCategory::PRECEDENCE`])
//! evaluated first-match-wins: a rule matches when the category predicate
//! holds *and* its bounds are enforced in policy, otherwise evaluation falls
//! through to the next rule and ultimately to the unrestricted default.

use crate::item::{ItemCategory, ItemProfile};
use crate::policy::PolicySettings;
use crate::quality::{Quality, QualityRange};

/// Resolves the category whose bounds govern `item`, falling through
/// disabled or non-matching rules to [`ItemCategory::Other`].
pub fn resolve_category(item: &ItemProfile, policy: &PolicySettings) -> ItemCategory {
    ItemCategory::PRECEDENCE
        .into_iter()
        .find(|category| {
            category.applies_to(item)
                && policy
                    .bounds(*category)
                    .is_some_and(|bounds| bounds.enforced)
        })
        .unwrap_or(ItemCategory::Other)
}

/// Resolves the admissible quality range for `item` under `policy`.
///
/// Artwork overrides only the maximum: it is unconditionally
/// [`Quality::Legendary`], while the minimum still follows category rules.
pub fn resolve_range(item: &ItemProfile, policy: &PolicySettings) -> QualityRange {
    let mut range = policy
        .bounds(resolve_category(item, policy))
        .and_then(|bounds| bounds.range())
        .unwrap_or_else(QualityRange::full);
    if item.is_art() {
        range.max = Quality::Legendary;
    }
    range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemDefId, ItemFlags};
    use crate::policy::CategoryBounds;

    fn item(flags: ItemFlags) -> ItemProfile {
        ItemProfile::new(ItemDefId(7), flags)
    }

    #[test]
    fn unmatched_item_gets_the_full_range() {
        let policy = PolicySettings::default();
        let profile = item(ItemFlags::empty());
        assert_eq!(resolve_category(&profile, &policy), ItemCategory::Other);
        assert_eq!(resolve_range(&profile, &policy), QualityRange::full());
    }

    #[test]
    fn stuff_takes_precedence_over_manufactured() {
        let mut policy = PolicySettings::default();
        policy.stuff = CategoryBounds::enforced(Quality::Poor, Quality::Good);
        let profile = item(ItemFlags::STUFF | ItemFlags::MANUFACTURED);
        assert_eq!(resolve_category(&profile, &policy), ItemCategory::Stuff);
        assert_eq!(
            resolve_range(&profile, &policy),
            QualityRange::new(Quality::Poor, Quality::Good)
        );
    }

    #[test]
    fn building_sub_branches_resolve_in_order() {
        let mut policy = PolicySettings::default();
        policy.work_table = CategoryBounds::enforced(Quality::Normal, Quality::Legendary);
        policy.security = CategoryBounds::enforced(Quality::Poor, Quality::Excellent);
        policy.building = CategoryBounds::enforced(Quality::Awful, Quality::Good);

        let table = item(ItemFlags::BUILDING | ItemFlags::WORK_TABLE);
        assert_eq!(resolve_category(&table, &policy), ItemCategory::WorkTable);

        let turret = item(ItemFlags::BUILDING | ItemFlags::TURRET);
        assert_eq!(
            resolve_category(&turret, &policy),
            ItemCategory::SecurityBuilding
        );

        let wall = item(ItemFlags::BUILDING);
        assert_eq!(resolve_category(&wall, &policy), ItemCategory::Building);
    }

    #[test]
    fn disabled_rule_falls_through_to_the_next_match() {
        let mut policy = PolicySettings::default();
        policy.work_table = CategoryBounds::unenforced();
        policy.building = CategoryBounds::enforced(Quality::Poor, Quality::Excellent);

        let table = item(ItemFlags::BUILDING | ItemFlags::WORK_TABLE);
        assert_eq!(resolve_category(&table, &policy), ItemCategory::Building);
        assert_eq!(
            resolve_range(&table, &policy),
            QualityRange::new(Quality::Poor, Quality::Excellent)
        );
    }

    #[test]
    fn building_with_all_rules_disabled_is_unrestricted() {
        let mut policy = PolicySettings::default();
        policy.manufactured = CategoryBounds::unenforced();
        let wall = item(ItemFlags::BUILDING);
        assert_eq!(resolve_range(&wall, &policy), QualityRange::full());
    }

    #[test]
    fn meal_beats_nutritive_sub_branches() {
        let mut policy = PolicySettings::default();
        policy.meal = CategoryBounds::enforced(Quality::Normal, Quality::Masterwork);
        policy.tasty_ingestible = CategoryBounds::enforced(Quality::Awful, Quality::Poor);

        let flags = ItemFlags::INGESTIBLE
            | ItemFlags::MEAL
            | ItemFlags::NUTRITIVE
            | ItemFlags::TASTY_RAW;
        assert_eq!(resolve_category(&item(flags), &policy), ItemCategory::Meal);
    }

    #[test]
    fn tasty_raw_beats_plain_nutritive() {
        let mut policy = PolicySettings::default();
        policy.tasty_ingestible = CategoryBounds::enforced(Quality::Good, Quality::Legendary);
        policy.nutritive_ingestible = CategoryBounds::enforced(Quality::Awful, Quality::Normal);

        let tasty = item(ItemFlags::INGESTIBLE | ItemFlags::NUTRITIVE | ItemFlags::TASTY_RAW);
        assert_eq!(
            resolve_category(&tasty, &policy),
            ItemCategory::TastyIngestible
        );

        let plain = item(ItemFlags::INGESTIBLE | ItemFlags::NUTRITIVE);
        assert_eq!(
            resolve_category(&plain, &policy),
            ItemCategory::NutritiveIngestible
        );
    }

    #[test]
    fn art_overrides_only_the_maximum() {
        let mut policy = PolicySettings::default();
        policy.manufactured = CategoryBounds::enforced(Quality::Poor, Quality::Good);

        let sculpture = item(ItemFlags::MANUFACTURED | ItemFlags::ART);
        assert_eq!(
            resolve_range(&sculpture, &policy),
            QualityRange::new(Quality::Poor, Quality::Legendary)
        );
    }

    #[test]
    fn resolution_is_pure() {
        let mut policy = PolicySettings::default();
        policy.weapon = CategoryBounds::enforced(Quality::Poor, Quality::Masterwork);
        let sword = item(ItemFlags::WEAPON);
        assert_eq!(
            resolve_range(&sword, &policy),
            resolve_range(&sword, &policy)
        );
    }
}
