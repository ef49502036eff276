//! Owned inventory items

use serde::{Deserialize, Serialize};

use super::class::DestinyClass;
use super::definitions::{ItemDefinition, ItemTier};
use super::ids::{ItemId, StoreId};

/// A stat value rolled on an item instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat_hash: u32,
    pub value: i32,
}

/// An item instance in a player's inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Instance id; "0" for items synthesized from a definition
    pub id: ItemId,
    pub hash: u32,
    pub name: String,
    pub bucket_hash: u32,
    /// Store currently holding the item
    pub owner: StoreId,
    #[serde(default)]
    pub tier: ItemTier,
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub class_type: DestinyClass,
    #[serde(default)]
    pub power: u32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub equipped: bool,
    #[serde(default)]
    pub masterworked: bool,
    #[serde(default)]
    pub stats: Vec<ItemStat>,
    #[serde(default)]
    pub perks: Vec<String>,
}

impl InventoryItem {
    /// Build a stand-in item from its definition, used when a loadout
    /// references an item the player no longer owns
    pub fn from_definition(def: &ItemDefinition, owner: StoreId) -> Self {
        Self {
            id: ItemId::from("0"),
            hash: def.hash,
            name: def.name.clone(),
            bucket_hash: def.bucket_hash,
            owner,
            tier: def.tier,
            item_type: def.item_type.clone(),
            class_type: def.class_type,
            power: 0,
            locked: false,
            equipped: false,
            masterworked: false,
            stats: def
                .base_stats
                .iter()
                .map(|(&stat_hash, &value)| ItemStat { stat_hash, value })
                .collect(),
            perks: Vec::new(),
        }
    }

    /// Value of a stat on this item, 0 if it doesn't roll it
    pub fn stat(&self, stat_hash: u32) -> i32 {
        self.stats
            .iter()
            .find(|s| s.stat_hash == stat_hash)
            .map(|s| s.value)
            .unwrap_or(0)
    }
}
