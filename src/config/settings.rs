//! User settings for loadout-sheets
//!
//! Manages export file naming, date formatting, and import confirmation
//! preferences.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::SheetsPaths;
use crate::error::SheetsError;

/// User settings for loadout-sheets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Where exports go when no output path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Base name (without extension) of the loadouts spreadsheet
    #[serde(default = "default_loadouts_file_name")]
    pub loadouts_file_name: String,

    /// Label used in the "Class Type" column for class-agnostic loadouts
    #[serde(default = "default_any_class_label")]
    pub any_class_label: String,

    /// Date format for the "Last Edited" column (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether `import` asks before overwriting tags and notes
    #[serde(default = "default_confirm_import")]
    pub confirm_import: bool,

    /// Log filter used when RUST_LOG is unset (e.g. "info", "loadout_sheets=debug")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_loadouts_file_name() -> String {
    "destinyLoadouts".to_string()
}

fn default_any_class_label() -> String {
    "Any".to_string()
}

fn default_date_format() -> String {
    // Matches JavaScript's Date.toDateString(), e.g. "Wed Jan 15 2025"
    "%a %b %d %Y".to_string()
}

fn default_confirm_import() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            export_dir: None,
            loadouts_file_name: default_loadouts_file_name(),
            any_class_label: default_any_class_label(),
            date_format: default_date_format(),
            confirm_import: default_confirm_import(),
            log_level: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SheetsPaths) -> Result<Self, SheetsError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SheetsError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SheetsError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SheetsPaths) -> Result<(), SheetsError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SheetsError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SheetsError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Directory exports are written to when no explicit path is given
    pub fn resolve_export_dir(&self, paths: &SheetsPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.exports_dir())
    }
}
