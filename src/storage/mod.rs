//! Storage layer for loadout-sheets
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. The inventory snapshot and loadouts are read-only inputs; item
//! annotations are owned and written back.

pub mod annotations;
pub mod file_io;
pub mod snapshot;

pub use annotations::AnnotationRepository;
pub use file_io::{read_json, write_atomic, write_json_atomic};
pub use snapshot::{LoadoutRepository, SnapshotRepository};

use crate::config::paths::SheetsPaths;
use crate::error::SheetsError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SheetsPaths,
    pub inventory: SnapshotRepository,
    pub loadouts: LoadoutRepository,
    pub annotations: AnnotationRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SheetsPaths) -> Result<Self, SheetsError> {
        paths.ensure_directories()?;

        Ok(Self {
            inventory: SnapshotRepository::new(paths.inventory_file()),
            loadouts: LoadoutRepository::new(paths.loadouts_file()),
            annotations: AnnotationRepository::new(paths.annotations_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SheetsPaths {
        &self.paths
    }

    /// Load owned data from disk
    pub fn load_all(&mut self) -> Result<(), SheetsError> {
        self.annotations.load()?;
        Ok(())
    }

    /// Save owned data to disk
    pub fn save_all(&self) -> Result<(), SheetsError> {
        self.annotations.save()?;
        Ok(())
    }
}
