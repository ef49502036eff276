//! Export module for loadout-sheets
//!
//! Spreadsheet exports:
//! - Loadouts: one row per saved loadout
//! - Items: weapons, armor or ghosts with tags and notes

pub mod items;
pub mod loadouts;
pub mod sheet;

pub use items::{export_items_csv, ItemSheet};
pub use loadouts::{build_loadout_rows, export_loadouts_csv};
pub use sheet::{write_csv, CsvRow, CsvValue};
