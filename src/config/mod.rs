//! Configuration module for loadout-sheets
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SheetsPaths;
pub use settings::Settings;
