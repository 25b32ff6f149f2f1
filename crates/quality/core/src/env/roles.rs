//! Role-based production offsets.

use crate::skill::AgentId;

/// Looks up the production-quality offset granted by an agent's social or
/// ideological role.
pub trait RoleOracle: Send + Sync {
    /// Offset (in tier steps) from the first matching production-quality
    /// role effect, or `None` when the agent holds no such role.
    ///
    /// Hosts without a role system return `None` for every agent.
    fn production_quality_offset(&self, agent: AgentId) -> Option<i32>;
}
