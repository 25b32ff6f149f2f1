//! Opaque tier-generation curves owned by the host.

use crate::quality::Quality;

/// Host-provided quality curves.
///
/// The resolver does not define how a skill level maps to a base tier, nor
/// the distribution of the fallback generator; both are opaque rules
/// delegated to the host so the core stays deterministic and independently
/// testable with stand-ins.
pub trait TierOracle: Send + Sync {
    /// Base quality tier for an effective skill `level`, optionally boosted
    /// by an inspired production.
    fn quality_for_level(&self, level: i32, inspired: bool) -> Quality;

    /// General-purpose random quality, used only on the fallback path
    /// (no governing skill, or unskilled butchering products).
    fn random_quality(&self) -> Quality;
}
