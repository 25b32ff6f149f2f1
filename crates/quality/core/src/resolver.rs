//! The quality pipeline: compose level, inspiration, supply, and role
//! modifiers into a final clamped tier.

use crate::env::{
    CraftEnv, InspirationOracle, OracleError, PlantOracle, RoleOracle, SkillOracle, TierOracle,
};
use crate::item::{ItemFlags, ItemProfile};
use crate::level::resolve_effective_level;
use crate::policy::PolicySettings;
use crate::quality::Quality;
use crate::range::resolve_range;
use crate::skill::{AgentId, Skill, SkillRequirement};

/// Inspirations only end when the boost can actually land above this tier.
const INSPIRATION_PAYOFF_THRESHOLD: Quality = Quality::Excellent;

/// Resolves the quality of one production event.
///
/// The pipeline, in order:
///
/// 1. Stone-block cutting re-routes the governing skill to
///    [`Skill::Crafting`] when `skilled_stonecutting` is on.
/// 2. Fallback: with no governing skill, or for meat/leather while
///    `skilled_butchering` is off, the result is one draw from the host's
///    random-quality generator, **without** a range clamp (preserved
///    behavior; see DESIGN.md).
/// 3. Otherwise the category range and effective level are resolved, the
///    host's tier curve produces a base tier, a role-based production
///    offset is added (saturating at [`Quality::Legendary`] *before* the
///    range clamp), a matching inspiration is consumed when the resolved
///    maximum lies above [`Quality::Excellent`], and the tier is clamped
///    into the range.
///
/// Reentrant and idempotent up to the inspiration side effect and the
/// fallback generator's randomness; concurrent calls for the same agent
/// must be serialized by the caller.
///
/// # Errors
///
/// Fails fast with an [`OracleError`] when a required oracle is missing
/// from `env` or the agent does not track the governing skill.
#[allow(clippy::too_many_arguments)]
pub fn generate_quality<S, T, R, P, I>(
    env: &CraftEnv<'_, S, T, R, P, I>,
    agent: AgentId,
    governing_skill: Option<Skill>,
    item: &ItemProfile,
    policy: &PolicySettings,
    supply_quality: Option<Quality>,
    skill_requirements: Option<&[SkillRequirement]>,
) -> Result<Quality, OracleError>
where
    S: SkillOracle + ?Sized,
    T: TierOracle + ?Sized,
    R: RoleOracle + ?Sized,
    P: PlantOracle + ?Sized,
    I: InspirationOracle + ?Sized,
{
    let mut governing_skill = governing_skill;
    if policy.skilled_stonecutting && item.flags.contains(ItemFlags::STONE_BLOCKS) {
        governing_skill = Some(Skill::Crafting);
    }

    let unskilled_butchery = !policy.skilled_butchering && item.is_meat_or_leather();
    let Some(skill) = governing_skill.filter(|_| !unskilled_butchery) else {
        return Ok(env.tiers()?.random_quality());
    };

    let range = resolve_range(item, policy);
    let base_level = env
        .skills()?
        .skill_level(agent, skill)
        .ok_or(OracleError::SkillNotTracked { agent, skill })?;

    let inspiration = env.inspiration()?;
    let matching = inspiration.matching_inspiration(item, skill);
    let inspired = matching.is_some() && matching == inspiration.active_inspiration(agent);

    let level = resolve_effective_level(
        env,
        base_level,
        skill,
        item,
        policy,
        skill_requirements,
        supply_quality,
        range.max,
    )?;

    let mut tier = env.tiers()?.quality_for_level(level, inspired);
    if let Some(offset) = env.roles()?.production_quality_offset(agent) {
        tier = tier.offset(offset);
    }

    if inspired
        && range.max > INSPIRATION_PAYOFF_THRESHOLD
        && let Some(ended) = matching
    {
        inspiration.end_inspiration(agent, ended);
    }

    Ok(tier.clamp_to(range))
}
