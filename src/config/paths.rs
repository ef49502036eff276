//! Path management for loadout-sheets
//!
//! Provides XDG-compliant path resolution for configuration, snapshot data,
//! and export output.
//!
//! ## Path Resolution Order
//!
//! 1. `LOADOUT_SHEETS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/loadout-sheets` or `~/.config/loadout-sheets`
//! 3. Windows: `%APPDATA%\loadout-sheets`

use std::path::PathBuf;

use crate::error::SheetsError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "LOADOUT_SHEETS_DATA_DIR";

/// Manages all paths used by loadout-sheets
#[derive(Debug, Clone)]
pub struct SheetsPaths {
    /// Base directory for all loadout-sheets data
    base_dir: PathBuf,
}

impl SheetsPaths {
    /// Create a new SheetsPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SheetsError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SheetsPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/loadout-sheets/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the inventory snapshot and annotations
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default directory for exported spreadsheets
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Inventory snapshot: definitions, stores and items
    pub fn inventory_file(&self) -> PathBuf {
        self.data_dir().join("inventory.json")
    }

    /// Saved loadouts
    pub fn loadouts_file(&self) -> PathBuf {
        self.data_dir().join("loadouts.json")
    }

    /// Item tags and notes
    pub fn annotations_file(&self) -> PathBuf {
        self.data_dir().join("annotations.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), SheetsError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SheetsError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SheetsError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SheetsError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("loadout-sheets"));
    }
    let home = std::env::var("HOME")
        .map_err(|_| SheetsError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join("loadout-sheets"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SheetsError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SheetsError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("loadout-sheets"))
}
