//! Read-only access to the inventory snapshot and saved loadouts
//!
//! Both files are written by the inventory manager; this tool never
//! modifies them.

use std::path::PathBuf;

use crate::error::SheetsError;
use crate::models::{InventorySnapshot, Loadout};

use super::file_io::read_json;

/// Serializable loadout data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct LoadoutData {
    loadouts: Vec<Loadout>,
}

/// Repository for the inventory snapshot
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the snapshot; a missing file is an empty (not loaded) snapshot
    pub fn load(&self) -> Result<InventorySnapshot, SheetsError> {
        read_json(&self.path)
    }
}

/// Repository for saved loadouts
pub struct LoadoutRepository {
    path: PathBuf,
}

impl LoadoutRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read all loadouts in saved order
    pub fn load(&self) -> Result<Vec<Loadout>, SheetsError> {
        let data: LoadoutData = read_json(&self.path)?;
        Ok(data.loadouts)
    }
}
