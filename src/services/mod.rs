//! Service layer for loadout-sheets
//!
//! Loadout resolution and stat math used by the exports, and the tag/notes
//! import on top of the annotation storage.

pub mod import;
pub mod resolve;
pub mod stats;

pub use import::{ImportResult, ImportService};
pub use resolve::{fully_resolve_loadout, ResolvedLoadout, ResolvedLoadoutItem};
pub use stats::{loadout_stats, StatTotal};
