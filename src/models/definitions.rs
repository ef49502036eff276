//! Manifest definitions
//!
//! The subset of the game manifest the exports need: item and plug
//! definitions, stat names, and class names. Mods, subclass abilities,
//! aspects, fragments and artifact perks are all item definitions.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::class::DestinyClass;

pub const STAT_MOBILITY: u32 = 2996146975;
pub const STAT_RESILIENCE: u32 = 392767087;
pub const STAT_RECOVERY: u32 = 1943323491;
pub const STAT_DISCIPLINE: u32 = 1735777505;
pub const STAT_INTELLECT: u32 = 144602215;
pub const STAT_STRENGTH: u32 = 4244567218;

/// Armor stats in display order
pub const ARMOR_STATS: [u32; 6] = [
    STAT_MOBILITY,
    STAT_RESILIENCE,
    STAT_RECOVERY,
    STAT_DISCIPLINE,
    STAT_INTELLECT,
    STAT_STRENGTH,
];

/// Socket categories of a subclass that hold abilities (super, grenade, melee, ...)
pub const SUBCLASS_ABILITY_SOCKET_CATEGORIES: [u32; 5] =
    [309722977, 3218807805, 457473665, 2047681910, 3201856887];

/// Socket categories of a subclass that hold aspects
pub const ASPECT_SOCKET_CATEGORIES: [u32; 3] = [2140934067, 764703411, 3400923910];

/// Socket categories of a subclass that hold fragments
pub const FRAGMENT_SOCKET_CATEGORIES: [u32; 4] = [271461480, 2819965312, 1313488945, 193371309];

/// Item rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemTier {
    #[default]
    Basic,
    Common,
    Rare,
    Legendary,
    Exotic,
}

impl std::fmt::Display for ItemTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "Basic"),
            Self::Common => write!(f, "Common"),
            Self::Rare => write!(f, "Rare"),
            Self::Legendary => write!(f, "Legendary"),
            Self::Exotic => write!(f, "Exotic"),
        }
    }
}

/// A socket on an item definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketDefinition {
    /// Socket category this socket belongs to
    pub category_hash: u32,
}

/// Definition of an inventory item (weapons, armor, subclasses, mods, plugs)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub hash: u32,
    pub name: String,
    #[serde(default)]
    pub bucket_hash: u32,
    #[serde(default)]
    pub tier: ItemTier,
    /// Type display name, e.g. "Hand Cannon" or "Helmet"
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub class_type: DestinyClass,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sockets: Vec<SocketDefinition>,
    /// Stats a fresh copy of this item rolls with
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub base_stats: BTreeMap<u32, i32>,
    /// Stat changes this plug grants when socketed
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub stat_bonuses: BTreeMap<u32, i32>,
    /// Conditional stat changes (e.g. font mods) that only apply in activity
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub runtime_stat_bonuses: BTreeMap<u32, i32>,
}

impl ItemDefinition {
    /// Create a definition with only the identifying fields set
    pub fn new(hash: u32, name: impl Into<String>, bucket_hash: u32) -> Self {
        Self {
            hash,
            name: name.into(),
            bucket_hash,
            tier: ItemTier::default(),
            item_type: String::new(),
            class_type: DestinyClass::Unknown,
            sockets: Vec::new(),
            base_stats: BTreeMap::new(),
            stat_bonuses: BTreeMap::new(),
            runtime_stat_bonuses: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatDefinition {
    pub hash: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub class_type: DestinyClass,
    pub name: String,
}

/// Manifest tables keyed by hash
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definitions {
    #[serde(default)]
    pub items: HashMap<u32, ItemDefinition>,
    #[serde(default)]
    pub stats: HashMap<u32, StatDefinition>,
    #[serde(default)]
    pub classes: Vec<ClassDefinition>,
}

impl Definitions {
    pub fn item(&self, hash: u32) -> Option<&ItemDefinition> {
        self.items.get(&hash)
    }

    pub fn stat(&self, hash: u32) -> Option<&StatDefinition> {
        self.stats.get(&hash)
    }

    /// Display name of a class, if the manifest knows it
    pub fn class_name(&self, class_type: DestinyClass) -> Option<&str> {
        self.classes
            .iter()
            .find(|c| c.class_type == class_type)
            .map(|c| c.name.as_str())
    }

    /// Whether the manifest holds anything at all
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.stats.is_empty() && self.classes.is_empty()
    }

    pub fn insert_item(&mut self, def: ItemDefinition) {
        self.items.insert(def.hash, def);
    }
}
