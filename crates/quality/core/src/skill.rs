//! Skills, skill requirements, and agent identity.

/// Opaque identifier for the producing agent, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct AgentId(pub u32);

/// Soft lower bound of a skill level; levels are clamped here before tier
/// composition on the supply-quality path.
pub const SKILL_LEVEL_MIN: i32 = 0;

/// Soft upper bound of a skill level.
pub const SKILL_LEVEL_MAX: i32 = 20;

/// The proficiency dimension governing an item's quality.
///
/// The host picks the governing skill per production and passes it into the
/// resolver; the only override the resolver itself performs is routing
/// stone-block cutting to [`Skill::Crafting`] when the policy enables it.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Skill {
    /// Erecting buildings and furniture.
    Construction,
    /// Sowing and harvesting plants. Drives the sow-skill deduction branch.
    Growing,
    /// Preparing meals and butchering.
    Cooking,
    /// General manufacturing (smithing, stonecutting, drug synthesis).
    Crafting,
    /// Sculpture and other artworks.
    Artistic,
    /// Tending and producing medicine.
    Medicine,
    /// Tailoring apparel.
    Tailoring,
}

/// A single skill threshold a production recipe demands.
///
/// When explicit requirements accompany a production, the sum of their
/// minimum levels is deducted from the agent's effective level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillRequirement {
    pub skill: Skill,
    pub min_level: i32,
}

impl SkillRequirement {
    pub const fn new(skill: Skill, min_level: i32) -> Self {
        Self { skill, min_level }
    }
}
