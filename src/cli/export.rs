//! CLI commands for spreadsheet export

use std::path::{Path, PathBuf};

use clap::{Subcommand, ValueEnum};

use crate::config::{settings::Settings, SheetsPaths};
use crate::error::{SheetsError, SheetsResult};
use crate::export::{export_items_csv, export_loadouts_csv, ItemSheet};
use crate::storage::{write_atomic, Storage};

/// Item sheet options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ItemKind {
    Weapons,
    Armor,
    Ghost,
}

impl From<ItemKind> for ItemSheet {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Weapons => ItemSheet::Weapons,
            ItemKind::Armor => ItemSheet::Armor,
            ItemKind::Ghost => ItemSheet::Ghost,
        }
    }
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export saved loadouts, one row per loadout
    Loadouts {
        /// Output file path (default: <export dir>/destinyLoadouts.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Export weapons, armor or ghosts with their tags and notes
    Items {
        /// Which items to export
        #[arg(value_enum)]
        kind: ItemKind,

        /// Output file path (default: <export dir>/destiny<Kind>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> SheetsResult<()> {
    match cmd {
        ExportCommands::Loadouts { output } => {
            let output = output.unwrap_or_else(|| {
                default_output(storage.paths(), settings, &settings.loadouts_file_name)
            });
            handle_export_loadouts(storage, settings, &output)
        }
        ExportCommands::Items { kind, output } => {
            let sheet = ItemSheet::from(kind);
            let output = output
                .unwrap_or_else(|| default_output(storage.paths(), settings, sheet.file_name()));
            handle_export_items(storage, settings, sheet, &output)
        }
    }
}

fn default_output(paths: &SheetsPaths, settings: &Settings, name: &str) -> PathBuf {
    settings
        .resolve_export_dir(paths)
        .join(format!("{}.csv", name))
}

fn handle_export_loadouts(storage: &Storage, settings: &Settings, output: &Path) -> SheetsResult<()> {
    let snapshot = storage.inventory.load()?;
    let loadouts = storage.loadouts.load()?;

    let mut count = 0;
    write_atomic(output, |writer| {
        count = export_loadouts_csv(&snapshot, &loadouts, settings, writer)?;
        Ok(())
    })
    .map_err(|e| export_error(e, output))?;

    println!(
        "Exported {} of {} loadouts to: {}",
        count,
        loadouts.len(),
        output.display()
    );
    Ok(())
}

fn handle_export_items(
    storage: &Storage,
    settings: &Settings,
    sheet: ItemSheet,
    output: &Path,
) -> SheetsResult<()> {
    let snapshot = storage.inventory.load()?;
    let annotations = storage.annotations.as_map()?;

    let mut count = 0;
    write_atomic(output, |writer| {
        count = export_items_csv(&snapshot, &annotations, sheet, settings, writer)?;
        Ok(())
    })
    .map_err(|e| export_error(e, output))?;

    println!("Exported {} {} items to: {}", count, sheet, output.display());
    Ok(())
}

/// Attach the output path to storage failures; domain errors pass through
fn export_error(err: SheetsError, output: &Path) -> SheetsError {
    match err {
        SheetsError::Storage(msg) | SheetsError::Io(msg) => {
            SheetsError::Export(format!("Failed to write {}: {}", output.display(), msg))
        }
        other => other,
    }
}
