//! Loadout model
//!
//! A loadout is a saved configuration of items, mods and subclass choices for
//! a character class.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::class::DestinyClass;
use super::ids::{ItemId, LoadoutId};

/// `exotic_armor_hash` sentinel: the loadout forbids exotic armor
pub const LOCKED_EXOTIC_NO_EXOTIC: i64 = -1;
/// `exotic_armor_hash` sentinel: the loadout accepts any exotic armor
pub const LOCKED_EXOTIC_ANY_EXOTIC: i64 = -2;

/// A reference from a loadout to an item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadoutItem {
    /// Instance id of the item ("0" for items referenced by hash only)
    pub id: ItemId,
    pub hash: u32,
    #[serde(default)]
    pub equip: bool,
    /// Socket index to plug hash, used for subclass configuration
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub socket_overrides: BTreeMap<usize, u32>,
}

impl LoadoutItem {
    pub fn new(id: impl Into<ItemId>, hash: u32, equip: bool) -> Self {
        Self {
            id: id.into(),
            hash,
            equip,
            socket_overrides: BTreeMap::new(),
        }
    }

    /// Set a socket override
    pub fn with_override(mut self, socket_index: usize, plug_hash: u32) -> Self {
        self.socket_overrides.insert(socket_index, plug_hash);
        self
    }
}

/// Seasonal artifact perks unlocked for a loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactUnlocks {
    pub season_number: u32,
    #[serde(default)]
    pub unlocked_item_hashes: Vec<u32>,
}

/// Optional build parameters saved with a loadout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadoutParameters {
    /// Armor mod plug hashes
    #[serde(default)]
    pub mods: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_unlocks: Option<ArtifactUnlocks>,
    /// Required exotic armor hash, or one of the LOCKED_EXOTIC_* sentinels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exotic_armor_hash: Option<i64>,
    /// Whether conditional (font) stat bonuses count toward stats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_runtime_stat_benefits: Option<bool>,
}

/// A saved loadout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loadout {
    pub id: LoadoutId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub class_type: DestinyClass,
    /// Milliseconds since the Unix epoch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<i64>,
    #[serde(default)]
    pub items: Vec<LoadoutItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<LoadoutParameters>,
}

impl Loadout {
    pub fn new(id: impl Into<LoadoutId>, name: impl Into<String>, class_type: DestinyClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            notes: None,
            class_type,
            last_updated_at: None,
            items: Vec::new(),
            parameters: None,
        }
    }

    /// Whether runtime stat benefits count toward this loadout's stats (default: yes)
    pub fn includes_runtime_stat_benefits(&self) -> bool {
        self.parameters
            .as_ref()
            .and_then(|p| p.include_runtime_stat_benefits)
            .unwrap_or(true)
    }

    /// When the loadout was last edited
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated_at
            .and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}
