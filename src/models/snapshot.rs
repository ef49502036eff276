//! Inventory snapshot
//!
//! A point-in-time copy of the inventory store: manifest definitions, the
//! player's characters and every item they own.

use serde::{Deserialize, Serialize};

use super::definitions::Definitions;
use super::ids::{ItemId, StoreId};
use super::item::InventoryItem;
use super::store::Store;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InventorySnapshot {
    /// None until the manifest has been loaded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Definitions>,
    #[serde(default)]
    pub stores: Vec<Store>,
    #[serde(default)]
    pub items: Vec<InventoryItem>,
}

impl InventorySnapshot {
    /// Definitions, if the snapshot is loaded enough to export from
    ///
    /// Exports need both the manifest and at least one store.
    pub fn loaded_definitions(&self) -> Option<&Definitions> {
        if self.stores.is_empty() {
            return None;
        }
        self.definitions.as_ref().filter(|d| !d.is_empty())
    }

    pub fn item(&self, id: &ItemId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| &i.id == id)
    }

    pub fn store(&self, id: &StoreId) -> Option<&Store> {
        self.stores.iter().find(|s| &s.id == id)
    }
}
