//! CLI command handler for tag/notes import

use std::io::Write;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::SheetsResult;
use crate::services::ImportService;
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(
    storage: &Storage,
    settings: &Settings,
    files: &[PathBuf],
    yes: bool,
) -> SheetsResult<()> {
    // Fail on the file selection before asking anything
    ImportService::check_file_types(files)?;

    if settings.confirm_import && !yes {
        print!(
            "Importing will overwrite tags and notes for every item in {} file(s). Continue? (yes/no): ",
            files.len()
        );
        std::io::stdout().flush()?;

        let mut confirm = String::new();
        std::io::stdin().read_line(&mut confirm)?;

        if confirm.trim().to_lowercase() != "yes" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let result = ImportService::new(storage).import_files(files)?;

    println!(
        "Imported tags and notes for {} items ({} changed).",
        result.applied, result.changed
    );
    for (file, row, tag) in &result.unknown_tags {
        println!("  {} row {}: unknown tag '{}' ignored", file, row, tag);
    }
    if !result.errors.is_empty() {
        println!("Skipped {} rows:", result.errors.len());
        for (file, row, message) in result.errors.iter().take(10) {
            println!("  {} row {}: {}", file, row, message);
        }
        if result.errors.len() > 10 {
            println!("  ... and {} more", result.errors.len() - 10);
        }
    }

    Ok(())
}
