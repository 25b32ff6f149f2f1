//! Deterministic quality-tier resolution for produced items.
//!
//! `quality-core` decides which of seven quality ranks a production event
//! yields, given the producing agent's skill, the item's classification,
//! optional supply quality, and host-owned policy toggles. It is a pure
//! decision library: all host collaborators (skill storage, tier curves,
//! role effects, plant catalogs, inspiration state) enter through the
//! oracle traits in [`env`], and the single evaluation pipeline is
//! [`generate_quality`].
pub mod env;
pub mod item;
pub mod level;
pub mod policy;
pub mod quality;
pub mod range;
pub mod resolver;
pub mod skill;

pub use env::{
    CraftEnv, InspirationId, InspirationOracle, OracleError, PlantOracle, QualityEnv, RoleOracle,
    SkillOracle, TierOracle,
};
pub use item::{ItemCategory, ItemDefId, ItemFlags, ItemProfile};
pub use level::resolve_effective_level;
pub use policy::{CategoryBounds, PolicyError, PolicySettings};
pub use quality::{Quality, QualityRange};
pub use range::{resolve_category, resolve_range};
pub use resolver::generate_quality;
pub use skill::{AgentId, SKILL_LEVEL_MAX, SKILL_LEVEL_MIN, Skill, SkillRequirement};
