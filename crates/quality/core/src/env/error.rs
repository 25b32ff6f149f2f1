//! Oracle access errors.

use crate::skill::{AgentId, Skill};

/// Errors that occur when accessing oracle data.
///
/// Missing oracles and untracked skills are caller programming errors: the
/// resolver fails fast with a typed error rather than silently producing an
/// out-of-range result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    /// SkillOracle is not available in the environment.
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    /// TierOracle is not available in the environment.
    #[error("TierOracle not available")]
    TiersNotAvailable,

    /// RoleOracle is not available in the environment.
    #[error("RoleOracle not available")]
    RolesNotAvailable,

    /// PlantOracle is not available in the environment.
    #[error("PlantOracle not available")]
    PlantsNotAvailable,

    /// InspirationOracle is not available in the environment.
    #[error("InspirationOracle not available")]
    InspirationNotAvailable,

    /// The governing skill is not tracked for this agent.
    #[error("agent {agent:?} does not track skill {skill}")]
    SkillNotTracked { agent: AgentId, skill: Skill },
}
