//! Effective-level resolution: skill deductions and supply-quality bonus.

use crate::env::{
    CraftEnv, InspirationOracle, OracleError, PlantOracle, RoleOracle, SkillOracle, TierOracle,
};
use crate::item::{ItemFlags, ItemProfile};
use crate::policy::PolicySettings;
use crate::quality::Quality;
use crate::skill::{SKILL_LEVEL_MAX, SKILL_LEVEL_MIN, Skill, SkillRequirement};

/// Computes the agent's effective skill level for one production.
///
/// Starting from `base_level` (the agent's proficiency in the governing
/// skill), applies in order:
///
/// 1. Skill-requirement deduction, when enabled: explicit requirement
///    thresholds win; otherwise harvested products deduct the steepest
///    sow-skill minimum from the plant catalog, and constructible items
///    deduct their construction prerequisite.
/// 2. Supply-quality bonus, when enabled and a supply quality was provided:
///    `supply - min(max_quality, standard_supply_quality)` in tier steps,
///    followed by a clamp into `[0, 20]`.
///
/// The result is intentionally unclamped when the supply branch does not
/// run; deductions alone may drive it negative and the tier curve is
/// expected to tolerate that.
///
/// # Errors
///
/// Returns [`OracleError::PlantsNotAvailable`] when the sow-skill branch is
/// reached without a plant oracle in the environment.
#[allow(clippy::too_many_arguments)]
pub fn resolve_effective_level<S, T, R, P, I>(
    env: &CraftEnv<'_, S, T, R, P, I>,
    base_level: i32,
    governing_skill: Skill,
    item: &ItemProfile,
    policy: &PolicySettings,
    skill_requirements: Option<&[SkillRequirement]>,
    supply_quality: Option<Quality>,
    max_quality: Quality,
) -> Result<i32, OracleError>
where
    S: SkillOracle + ?Sized,
    T: TierOracle + ?Sized,
    R: RoleOracle + ?Sized,
    P: PlantOracle + ?Sized,
    I: InspirationOracle + ?Sized,
{
    let mut level = base_level;

    if policy.use_skill_requirements {
        if let Some(requirements) = skill_requirements {
            level -= requirements
                .iter()
                .map(|requirement| requirement.min_level)
                .sum::<i32>();
        } else if governing_skill == Skill::Growing {
            level -= env.plants()?.max_sow_skill(item.def).unwrap_or(0);
        } else if item.flags.contains(ItemFlags::CONSTRUCTIBLE) {
            level -= item.construction_skill_prerequisite;
        }
    }

    if policy.supply_quality_enabled() {
        if let Some(supply) = supply_quality {
            let baseline = max_quality
                .index()
                .min(policy.standard_supply_quality.index());
            level += supply.index() - baseline;
        }
        // Clamped only on this branch, matching the observed pipeline.
        level = level.clamp(SKILL_LEVEL_MIN, SKILL_LEVEL_MAX);
    }

    Ok(level)
}
