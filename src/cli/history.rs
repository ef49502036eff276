//! CLI command handler for the annotation change history

use crate::audit::AuditLogger;
use crate::error::SheetsResult;
use crate::storage::Storage;

/// Print the most recent annotation changes
pub fn handle_history_command(storage: &Storage, limit: usize) -> SheetsResult<()> {
    let entries = AuditLogger::new(storage.paths().audit_log()).read_recent(limit)?;

    if entries.is_empty() {
        println!("No tag or notes changes recorded.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
