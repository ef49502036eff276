//! Inventory buckets and bucket categories
//!
//! Bucket hashes are the manifest's inventory bucket identifiers. Categories
//! group them in the order the game displays them, which is also the order
//! spreadsheet exports sort items by.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUBCLASS: u32 = 3284755031;
pub const KINETIC_WEAPONS: u32 = 1498876634;
pub const ENERGY_WEAPONS: u32 = 2465295065;
pub const POWER_WEAPONS: u32 = 953998645;
pub const HELMET: u32 = 3448274439;
pub const GAUNTLETS: u32 = 3551918588;
pub const CHEST_ARMOR: u32 = 14239492;
pub const LEG_ARMOR: u32 = 20886954;
pub const CLASS_ARMOR: u32 = 1585787867;
pub const GHOST: u32 = 4023194814;
pub const VEHICLE: u32 = 2025709351;
pub const SHIPS: u32 = 284967655;

/// Display category a bucket belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BucketCategory {
    Weapons,
    Armor,
    General,
}

impl BucketCategory {
    /// Buckets of this category in display order
    pub fn buckets(&self) -> &'static [u32] {
        match self {
            Self::Weapons => &[KINETIC_WEAPONS, ENERGY_WEAPONS, POWER_WEAPONS],
            Self::Armor => &[HELMET, GAUNTLETS, CHEST_ARMOR, LEG_ARMOR, CLASS_ARMOR],
            Self::General => &[GHOST, VEHICLE, SHIPS],
        }
    }

    /// Position of a bucket within this category, if it belongs to it
    pub fn position(&self, bucket_hash: u32) -> Option<usize> {
        self.buckets().iter().position(|&b| b == bucket_hash)
    }

    /// Category a bucket belongs to
    pub fn of(bucket_hash: u32) -> Option<Self> {
        [Self::Weapons, Self::Armor, Self::General]
            .into_iter()
            .find(|c| c.position(bucket_hash).is_some())
    }
}

impl fmt::Display for BucketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weapons => write!(f, "Weapons"),
            Self::Armor => write!(f, "Armor"),
            Self::General => write!(f, "General"),
        }
    }
}

/// Whether a bucket holds armor
pub fn is_armor(bucket_hash: u32) -> bool {
    BucketCategory::Armor.position(bucket_hash).is_some()
}
