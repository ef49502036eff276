//! loadout-sheets - spreadsheet export and import for Destiny loadouts
//!
//! Exports a player's saved loadouts and inventory items to CSV, and imports
//! item tags and notes back from edited spreadsheets.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Inventory snapshot, loadout and annotation data models
//! - `storage`: JSON file storage layer
//! - `services`: Loadout resolution, stat totals, tag/notes import
//! - `export`: CSV row building and serialization
//! - `audit`: Log of annotation changes
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use loadout_sheets::config::{SheetsPaths, Settings};
//! use loadout_sheets::export::export_loadouts_csv;
//! use loadout_sheets::storage::Storage;
//!
//! let paths = SheetsPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths)?;
//! let snapshot = storage.inventory.load()?;
//! let loadouts = storage.loadouts.load()?;
//! export_loadouts_csv(&snapshot, &loadouts, &settings, std::io::stdout())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

#[cfg(test)]
mod fixtures;

pub use error::{SheetsError, SheetsResult};
