//! Skill proficiency lookup.

use crate::skill::{AgentId, Skill};

/// Read-only view of the host's skill-proficiency storage.
pub trait SkillOracle: Send + Sync {
    /// Current proficiency of `agent` in `skill`, or `None` if the agent
    /// does not track that skill.
    ///
    /// Levels are nominally in `[0, 20]`; the resolver tolerates values
    /// outside that band and clamps where the pipeline requires it.
    fn skill_level(&self, agent: AgentId, skill: Skill) -> Option<i32>;
}
