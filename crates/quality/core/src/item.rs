//! Item classification inputs for the resolver.
//!
//! The host's item representation is out of scope; the resolver only sees an
//! [`ItemProfile`]: a definition handle, a set of classification flags, and a
//! construction prerequisite. [`ItemCategory`] is the closed classification
//! the range resolver derives from those flags, in a fixed precedence order.

use bitflags::bitflags;

/// Reference to an item definition stored outside the core (plant catalogs
/// key their harvested product by this handle).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemDefId(pub u32);

bitflags! {
    /// Classification predicates of the item being produced.
    ///
    /// Each bit mirrors one host-side predicate. Flags are not mutually
    /// exclusive; precedence between overlapping classifications is decided
    /// by [`ItemCategory::PRECEDENCE`], not here.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u32 {
        /// Raw material usable as stuff.
        const STUFF         = 1 << 0;
        /// Any building or edifice.
        const BUILDING      = 1 << 1;
        /// Production workstation (implies BUILDING).
        const WORK_TABLE    = 1 << 2;
        /// Member of the security-buildings category.
        const SECURITY      = 1 << 3;
        /// Turret (treated like security regardless of category membership).
        const TURRET        = 1 << 4;
        const DRUG          = 1 << 5;
        const MEDICINE      = 1 << 6;
        /// Anything that can be ingested.
        const INGESTIBLE    = 1 << 7;
        /// Prepared meal (implies INGESTIBLE).
        const MEAL          = 1 << 8;
        /// Nutrition-giving ingestible.
        const NUTRITIVE     = 1 << 9;
        /// Raw food that is tasty as-is (implies NUTRITIVE).
        const TASTY_RAW     = 1 << 10;
        const WEAPON        = 1 << 11;
        const APPAREL       = 1 << 12;
        /// Mortar shell / ammunition.
        const SHELL         = 1 << 13;
        /// Member of the generic manufactured category.
        const MANUFACTURED  = 1 << 14;
        /// Artwork; always eligible for the top tier.
        const ART           = 1 << 15;
        const MEAT          = 1 << 16;
        const LEATHER       = 1 << 17;
        /// Cut stone blocks; routed to the crafting skill when enabled.
        const STONE_BLOCKS  = 1 << 18;
        /// Has a constructible definition with a construction prerequisite.
        const CONSTRUCTIBLE = 1 << 19;
    }
}

/// Immutable per-call description of the item being produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemProfile {
    pub def: ItemDefId,
    pub flags: ItemFlags,
    /// Construction skill threshold deducted for constructible items when
    /// skill-requirement deduction is enabled and no explicit requirements
    /// accompany the production.
    pub construction_skill_prerequisite: i32,
}

impl ItemProfile {
    pub const fn new(def: ItemDefId, flags: ItemFlags) -> Self {
        Self {
            def,
            flags,
            construction_skill_prerequisite: 0,
        }
    }

    /// Sets the construction prerequisite (builder pattern).
    #[must_use]
    pub const fn with_construction_prerequisite(mut self, min_level: i32) -> Self {
        self.construction_skill_prerequisite = min_level;
        self
    }

    pub fn is_art(&self) -> bool {
        self.flags.contains(ItemFlags::ART)
    }

    pub fn is_meat_or_leather(&self) -> bool {
        self.flags.intersects(ItemFlags::MEAT | ItemFlags::LEATHER)
    }
}

/// Closed classification of produced items, one per production.
///
/// When an item's flags satisfy several categories, the first match in
/// [`ItemCategory::PRECEDENCE`] wins.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
pub enum ItemCategory {
    Stuff,
    WorkTable,
    SecurityBuilding,
    Building,
    Drug,
    Medicine,
    Meal,
    TastyIngestible,
    NutritiveIngestible,
    Weapon,
    Apparel,
    Shell,
    Manufactured,
    /// None of the above; quality is unrestricted.
    #[default]
    Other,
}

impl ItemCategory {
    /// Categories in dispatch order, first match wins.
    ///
    /// [`ItemCategory::Other`] is the fall-through and deliberately absent.
    pub const PRECEDENCE: [ItemCategory; 13] = [
        ItemCategory::Stuff,
        ItemCategory::WorkTable,
        ItemCategory::SecurityBuilding,
        ItemCategory::Building,
        ItemCategory::Drug,
        ItemCategory::Medicine,
        ItemCategory::Meal,
        ItemCategory::TastyIngestible,
        ItemCategory::NutritiveIngestible,
        ItemCategory::Weapon,
        ItemCategory::Apparel,
        ItemCategory::Shell,
        ItemCategory::Manufactured,
    ];

    /// Returns true if `item`'s flags satisfy this category's predicate.
    ///
    /// Predicates may overlap (a work table is also a building); dispatch
    /// order resolves the overlap.
    pub fn applies_to(self, item: &ItemProfile) -> bool {
        let flags = item.flags;
        match self {
            ItemCategory::Stuff => flags.contains(ItemFlags::STUFF),
            ItemCategory::WorkTable => {
                flags.contains(ItemFlags::BUILDING | ItemFlags::WORK_TABLE)
            }
            ItemCategory::SecurityBuilding => {
                flags.contains(ItemFlags::BUILDING)
                    && flags.intersects(ItemFlags::SECURITY | ItemFlags::TURRET)
            }
            ItemCategory::Building => flags.contains(ItemFlags::BUILDING),
            ItemCategory::Drug => flags.contains(ItemFlags::DRUG),
            ItemCategory::Medicine => flags.contains(ItemFlags::MEDICINE),
            ItemCategory::Meal => flags.contains(ItemFlags::INGESTIBLE | ItemFlags::MEAL),
            ItemCategory::TastyIngestible => flags.contains(
                ItemFlags::INGESTIBLE | ItemFlags::NUTRITIVE | ItemFlags::TASTY_RAW,
            ),
            ItemCategory::NutritiveIngestible => {
                flags.contains(ItemFlags::INGESTIBLE | ItemFlags::NUTRITIVE)
            }
            ItemCategory::Weapon => flags.contains(ItemFlags::WEAPON),
            ItemCategory::Apparel => flags.contains(ItemFlags::APPAREL),
            ItemCategory::Shell => flags.contains(ItemFlags::SHELL),
            ItemCategory::Manufactured => flags.contains(ItemFlags::MANUFACTURED),
            ItemCategory::Other => true,
        }
    }
}
