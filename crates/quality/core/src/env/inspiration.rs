//! Inspired-production state.

use crate::item::ItemProfile;
use crate::skill::{AgentId, Skill};

/// Opaque identifier for a kind of inspiration, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct InspirationId(pub u32);

/// Access to the agent's transient inspired state.
///
/// Ending an inspiration is the single external side effect this crate
/// triggers. It is scoped to the producing agent; implementations typically
/// use interior mutability behind `&self`.
pub trait InspirationOracle: Send + Sync {
    /// The inspiration kind that would boost producing `item` with `skill`,
    /// or `None` when no inspiration matches this production.
    fn matching_inspiration(&self, item: &ItemProfile, skill: Skill) -> Option<InspirationId>;

    /// The inspiration currently active on `agent`, if any.
    fn active_inspiration(&self, agent: AgentId) -> Option<InspirationId>;

    /// Consumes `inspiration` on `agent`.
    ///
    /// Called at most once per resolution, only when the production was
    /// inspired and the resolved maximum makes the boost meaningful.
    fn end_inspiration(&self, agent: AgentId, inspiration: InspirationId);
}
