//! Audit log of annotation changes
//!
//! Every tag/notes change made by an import is appended to `audit.log` as a
//! JSON line, with the annotation before and after the change and the file
//! that caused it.
//!
//! ```rust,ignore
//! use loadout_sheets::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log_batch(&[AuditEntry::change(None, &annotation, "tags.csv")])?;
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
