//! Traits describing the host collaborators the resolver consumes.
//!
//! Oracles expose skill proficiencies, opaque tier curves, role effects,
//! plant catalogs, and inspiration state. The [`CraftEnv`] aggregate bundles
//! them so the resolver can access everything it needs without hard coupling
//! to concrete implementations.

mod error;
mod inspiration;
mod plants;
mod roles;
mod skills;
mod tiers;

pub use error::OracleError;
pub use inspiration::{InspirationId, InspirationOracle};
pub use plants::PlantOracle;
pub use roles::RoleOracle;
pub use skills::SkillOracle;
pub use tiers::TierOracle;

/// Aggregates read-only oracles required by the quality pipeline.
///
/// Every accessor fails fast with an [`OracleError`] when the corresponding
/// oracle was not provided; the pipeline only touches the oracles a given
/// production actually needs (the plant catalog, for instance, is consulted
/// only for harvested products).
#[derive(Clone, Copy, Debug)]
pub struct CraftEnv<'a, S, T, R, P, I>
where
    S: SkillOracle + ?Sized,
    T: TierOracle + ?Sized,
    R: RoleOracle + ?Sized,
    P: PlantOracle + ?Sized,
    I: InspirationOracle + ?Sized,
{
    skills: Option<&'a S>,
    tiers: Option<&'a T>,
    roles: Option<&'a R>,
    plants: Option<&'a P>,
    inspiration: Option<&'a I>,
}

/// Trait-object form of [`CraftEnv`] for callers that mix oracle types.
pub type QualityEnv<'a> = CraftEnv<
    'a,
    dyn SkillOracle + 'a,
    dyn TierOracle + 'a,
    dyn RoleOracle + 'a,
    dyn PlantOracle + 'a,
    dyn InspirationOracle + 'a,
>;

impl<'a, S, T, R, P, I> CraftEnv<'a, S, T, R, P, I>
where
    S: SkillOracle + ?Sized,
    T: TierOracle + ?Sized,
    R: RoleOracle + ?Sized,
    P: PlantOracle + ?Sized,
    I: InspirationOracle + ?Sized,
{
    pub fn new(
        skills: Option<&'a S>,
        tiers: Option<&'a T>,
        roles: Option<&'a R>,
        plants: Option<&'a P>,
        inspiration: Option<&'a I>,
    ) -> Self {
        Self {
            skills,
            tiers,
            roles,
            plants,
            inspiration,
        }
    }

    pub fn with_all(
        skills: &'a S,
        tiers: &'a T,
        roles: &'a R,
        plants: &'a P,
        inspiration: &'a I,
    ) -> Self {
        Self::new(
            Some(skills),
            Some(tiers),
            Some(roles),
            Some(plants),
            Some(inspiration),
        )
    }

    pub fn empty() -> Self {
        Self {
            skills: None,
            tiers: None,
            roles: None,
            plants: None,
            inspiration: None,
        }
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a S, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }

    /// Returns the TierOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::TiersNotAvailable` if no tier oracle was provided.
    pub fn tiers(&self) -> Result<&'a T, OracleError> {
        self.tiers.ok_or(OracleError::TiersNotAvailable)
    }

    /// Returns the RoleOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RolesNotAvailable` if no role oracle was provided.
    pub fn roles(&self) -> Result<&'a R, OracleError> {
        self.roles.ok_or(OracleError::RolesNotAvailable)
    }

    /// Returns the PlantOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::PlantsNotAvailable` if no plant oracle was provided.
    pub fn plants(&self) -> Result<&'a P, OracleError> {
        self.plants.ok_or(OracleError::PlantsNotAvailable)
    }

    /// Returns the InspirationOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::InspirationNotAvailable` if no inspiration
    /// oracle was provided.
    pub fn inspiration(&self) -> Result<&'a I, OracleError> {
        self.inspiration.ok_or(OracleError::InspirationNotAvailable)
    }
}

impl<'a, S, T, R, P, I> CraftEnv<'a, S, T, R, P, I>
where
    S: SkillOracle + 'a,
    T: TierOracle + 'a,
    R: RoleOracle + 'a,
    P: PlantOracle + 'a,
    I: InspirationOracle + 'a,
{
    /// Converts this environment into the trait-object based [`QualityEnv`].
    pub fn as_quality_env(&self) -> QualityEnv<'a> {
        let skills: Option<&'a dyn SkillOracle> = self.skills.map(|skills| skills as _);
        let tiers: Option<&'a dyn TierOracle> = self.tiers.map(|tiers| tiers as _);
        let roles: Option<&'a dyn RoleOracle> = self.roles.map(|roles| roles as _);
        let plants: Option<&'a dyn PlantOracle> = self.plants.map(|plants| plants as _);
        let inspiration: Option<&'a dyn InspirationOracle> =
            self.inspiration.map(|inspiration| inspiration as _);
        CraftEnv::new(skills, tiers, roles, plants, inspiration)
    }
}
