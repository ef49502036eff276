//! Stores: characters and the vault

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::class::DestinyClass;
use super::ids::StoreId;

/// A character (or the vault) that holds items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    #[serde(default)]
    pub class_type: DestinyClass,
    #[serde(default)]
    pub is_vault: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_played: Option<DateTime<Utc>>,
}

impl Store {
    /// Create a character store
    pub fn character(id: impl Into<StoreId>, name: impl Into<String>, class_type: DestinyClass) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            class_type,
            is_vault: false,
            last_played: None,
        }
    }

    /// Create the vault store
    pub fn vault() -> Self {
        Self {
            id: StoreId::from("vault"),
            name: "Vault".to_string(),
            class_type: DestinyClass::Unknown,
            is_vault: true,
            last_played: None,
        }
    }

    /// Set when this character was last played
    pub fn with_last_played(mut self, at: DateTime<Utc>) -> Self {
        self.last_played = Some(at);
        self
    }
}

/// Pick the character whose inventory should back a loadout
///
/// Class-agnostic loadouts use the most recently played character; class
/// loadouts use the most recently played character of that class. The vault
/// never backs a loadout.
pub fn pick_backing_store(stores: &[Store], class_type: DestinyClass) -> Option<&Store> {
    stores
        .iter()
        .filter(|s| !s.is_vault)
        .filter(|s| class_type.is_any() || s.class_type == class_type)
        .max_by_key(|s| s.last_played)
}
