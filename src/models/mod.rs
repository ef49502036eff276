//! Core data models for loadout-sheets
//!
//! This module contains the data structures read from the inventory
//! snapshot (definitions, stores, items, loadouts) and the item annotations
//! the tool owns.

pub mod annotation;
pub mod bucket;
pub mod class;
pub mod definitions;
pub mod ids;
pub mod item;
pub mod loadout;
pub mod snapshot;
pub mod store;

pub use annotation::{ItemAnnotation, ItemTag};
pub use bucket::BucketCategory;
pub use class::DestinyClass;
pub use definitions::{ClassDefinition, Definitions, ItemDefinition, ItemTier, StatDefinition};
pub use ids::{ItemId, LoadoutId, StoreId};
pub use item::{InventoryItem, ItemStat};
pub use loadout::{ArtifactUnlocks, Loadout, LoadoutItem, LoadoutParameters};
pub use snapshot::InventorySnapshot;
pub use store::{pick_backing_store, Store};
