//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod history;
pub mod import;

pub use export::{handle_export_command, ExportCommands};
pub use history::handle_history_command;
pub use import::handle_import_command;
