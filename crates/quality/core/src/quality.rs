//! Quality tiers and tier ranges.
//!
//! [`Quality`] is the ordinal scale every production resolves to. Modifier
//! arithmetic (role offsets, clamping) operates on the tier's integer index
//! in `[0, 6]` and converts back at the end.

/// One of the seven ordered ranks a produced item can receive.
///
/// The ordering is total: `Awful < Poor < ... < Legendary`. Arithmetic on
/// tiers goes through [`Quality::index`] / [`Quality::from_index`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Quality {
    Awful,
    Poor,
    #[default]
    Normal,
    Good,
    Excellent,
    Masterwork,
    Legendary,
}

impl Quality {
    /// Lowest tier on the scale.
    pub const MIN: Quality = Quality::Awful;

    /// Highest tier on the scale.
    pub const MAX: Quality = Quality::Legendary;

    /// All tiers in ascending order.
    pub const ALL: [Quality; 7] = [
        Quality::Awful,
        Quality::Poor,
        Quality::Normal,
        Quality::Good,
        Quality::Excellent,
        Quality::Masterwork,
        Quality::Legendary,
    ];

    /// Ordinal index of this tier in `[0, 6]`.
    pub const fn index(self) -> i32 {
        match self {
            Quality::Awful => 0,
            Quality::Poor => 1,
            Quality::Normal => 2,
            Quality::Good => 3,
            Quality::Excellent => 4,
            Quality::Masterwork => 5,
            Quality::Legendary => 6,
        }
    }

    /// Converts an ordinal index back to a tier, saturating into `[0, 6]`.
    ///
    /// Out-of-range indices clamp to [`Quality::MIN`] / [`Quality::MAX`]
    /// rather than wrapping, so offset arithmetic can never leave the scale.
    pub const fn from_index(index: i32) -> Quality {
        match index {
            i32::MIN..=0 => Quality::Awful,
            1 => Quality::Poor,
            2 => Quality::Normal,
            3 => Quality::Good,
            4 => Quality::Excellent,
            5 => Quality::Masterwork,
            _ => Quality::Legendary,
        }
    }

    /// Shifts this tier by `delta` steps, saturating at both ends of the
    /// scale. A large positive offset caps at [`Quality::Legendary`].
    pub const fn offset(self, delta: i32) -> Quality {
        Quality::from_index(self.index() + delta)
    }

    /// Clamps this tier into `range`.
    ///
    /// Precondition: `range.min <= range.max` (enforced by
    /// [`PolicySettings::validate`](crate::policy::PolicySettings::validate)
    /// for policy-derived ranges).
    pub fn clamp_to(self, range: QualityRange) -> Quality {
        Quality::from_index(self.index().clamp(range.min.index(), range.max.index()))
    }
}

/// Inclusive band of admissible tiers for a production.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityRange {
    pub min: Quality,
    pub max: Quality,
}

impl QualityRange {
    pub const fn new(min: Quality, max: Quality) -> Self {
        Self { min, max }
    }

    /// The unrestricted range covering the whole scale.
    pub const fn full() -> Self {
        Self {
            min: Quality::MIN,
            max: Quality::MAX,
        }
    }

    /// Returns true if `quality` lies within this range.
    pub fn contains(&self, quality: Quality) -> bool {
        self.min <= quality && quality <= self.max
    }
}

impl Default for QualityRange {
    fn default() -> Self {
        Self::full()
    }
}
