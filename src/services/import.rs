//! Tag and notes import
//!
//! Reads spreadsheets previously produced by the item export (possibly
//! edited by the user) and applies their Tag and Notes columns back onto the
//! stored item annotations.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{Reader, StringRecord};
use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{SheetsError, SheetsResult};
use crate::models::{ItemAnnotation, ItemId, ItemTag};
use crate::storage::Storage;

/// Columns an import file must have
pub const REQUIRED_COLUMNS: [&str; 4] = ["Id", "Hash", "Tag", "Notes"];

/// What a row does to an item's tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagChange {
    Set(ItemTag),
    Clear,
    /// Unrecognized tag text; the existing tag is left alone
    Keep,
}

/// A parsed row from an import file
#[derive(Debug, Clone)]
pub struct ParsedAnnotation {
    /// Row number in the file (1-based, excluding header)
    pub row_number: usize,
    pub id: ItemId,
    pub hash: u32,
    pub tag: TagChange,
    /// None clears the notes
    pub notes: Option<String>,
}

impl ParsedAnnotation {
    /// Apply this row on top of an item's current annotation
    pub fn apply_to(&self, current: Option<&ItemAnnotation>) -> ItemAnnotation {
        let mut next = current
            .cloned()
            .unwrap_or_else(|| ItemAnnotation::new(self.id.clone(), self.hash));
        next.hash = self.hash;
        match self.tag {
            TagChange::Set(tag) => next.tag = Some(tag),
            TagChange::Clear => next.tag = None,
            TagChange::Keep => {}
        }
        next.notes = self.notes.clone();
        next
    }
}

/// Outcome of one row in an import file: the parsed row, or its row number and error
pub type RowResult = Result<ParsedAnnotation, (usize, String)>;

/// Result of a completed import
#[derive(Debug, Clone, Default)]
pub struct ImportResult {
    /// Rows applied to annotations
    pub applied: usize,
    /// Annotations that actually changed
    pub changed: usize,
    /// Files read
    pub files: usize,
    /// Error messages keyed by (file, row number)
    pub errors: Vec<(String, usize, String)>,
    /// Tags that weren't recognized, keyed by (file, row number)
    pub unknown_tags: Vec<(String, usize, String)>,
}

/// Service for importing tags and notes
pub struct ImportService<'a> {
    storage: &'a Storage,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Reject an empty selection or any file that isn't a CSV
    pub fn check_file_types(files: &[PathBuf]) -> SheetsResult<()> {
        let all_csv = files.iter().all(|f| {
            f.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
        });
        if files.is_empty() || !all_csv {
            return Err(SheetsError::WrongFileType);
        }
        Ok(())
    }

    /// Parse an import file from a reader
    ///
    /// Fails if there are no rows or required columns are missing; problems
    /// with individual rows are reported per row.
    pub fn parse_csv_from_reader<R: Read>(
        &self,
        reader: &mut Reader<R>,
        source: &str,
        unknown_tags: &mut Vec<(usize, String)>,
    ) -> SheetsResult<Vec<RowResult>> {
        let headers = reader.headers()?.clone();
        let records: Vec<_> = reader.records().collect();
        if records.is_empty() {
            return Err(SheetsError::EmptyFile(source.to_string()));
        }

        let columns = ColumnIndex::from_headers(&headers, source)?;

        let results = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| {
                let row_number = idx + 1;
                match record {
                    Ok(record) => columns.parse_record(&record, row_number, unknown_tags),
                    Err(e) => Err((row_number, format!("Error reading CSV record: {}", e))),
                }
            })
            .collect();
        Ok(results)
    }

    /// Import tags and notes from every file, all or nothing
    ///
    /// All files are parsed before anything changes, so a bad file leaves
    /// annotations untouched.
    pub fn import_files(&self, files: &[PathBuf]) -> SheetsResult<ImportResult> {
        Self::check_file_types(files)?;

        let mut result = ImportResult {
            files: files.len(),
            ..Default::default()
        };

        let mut parsed = Vec::new();
        for path in files {
            let source = display_name(path);
            let file = File::open(path).map_err(|e| {
                SheetsError::Import(format!("Failed to open {}: {}", path.display(), e))
            })?;
            let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

            let mut unknown = Vec::new();
            let rows = self.parse_csv_from_reader(&mut reader, &source, &mut unknown)?;
            for (row, tag) in unknown {
                warn!(file = %source, row, tag = %tag, "ignoring unknown tag");
                result.unknown_tags.push((source.clone(), row, tag));
            }
            parsed.push((source, rows));
        }

        let mut audit_entries = Vec::new();
        for (source, rows) in parsed {
            for row in rows {
                match row {
                    Ok(row) => {
                        let before = self.storage.annotations.get(&row.id)?;
                        let after = row.apply_to(before.as_ref());
                        result.applied += 1;
                        if before.as_ref() != Some(&after) && !(before.is_none() && after.is_empty()) {
                            result.changed += 1;
                            audit_entries.push(AuditEntry::change(before.as_ref(), &after, &source));
                        }
                        self.storage.annotations.upsert(after)?;
                    }
                    Err((row_number, message)) => {
                        debug!(file = %source, row = row_number, %message, "skipping row");
                        result.errors.push((source.clone(), row_number, message));
                    }
                }
            }
        }

        self.storage.annotations.save()?;
        AuditLogger::new(self.storage.paths().audit_log()).log_batch(&audit_entries)?;

        info!(
            files = result.files,
            applied = result.applied,
            changed = result.changed,
            errors = result.errors.len(),
            "imported tags and notes"
        );
        Ok(result)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Positions of the required columns in a file's header
struct ColumnIndex {
    id: usize,
    hash: usize,
    tag: usize,
    notes: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord, source: &str) -> SheetsResult<Self> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.trim(), i))
            .collect();

        let missing: Vec<_> = REQUIRED_COLUMNS
            .iter()
            .filter(|c| !positions.contains_key(*c))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(SheetsError::WrongFields {
                file: source.to_string(),
                missing: missing.join(", "),
            });
        }

        Ok(Self {
            id: positions["Id"],
            hash: positions["Hash"],
            tag: positions["Tag"],
            notes: positions["Notes"],
        })
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        row_number: usize,
        unknown_tags: &mut Vec<(usize, String)>,
    ) -> RowResult {
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let id = field(self.id).replace('"', "");
        if id.is_empty() {
            return Err((row_number, "Missing item id".to_string()));
        }

        let hash_str = field(self.hash);
        let hash = hash_str
            .parse::<u32>()
            .map_err(|_| (row_number, format!("Invalid item hash '{}'", hash_str)))?;

        let tag_str = field(self.tag).to_lowercase();
        let tag = if tag_str.is_empty() {
            TagChange::Clear
        } else {
            match tag_str.parse::<ItemTag>() {
                Ok(tag) => TagChange::Set(tag),
                Err(_) => {
                    unknown_tags.push((row_number, tag_str));
                    TagChange::Keep
                }
            }
        };

        let notes = Some(field(self.notes))
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(ParsedAnnotation {
            row_number,
            id: ItemId::from(id),
            hash,
            tag,
            notes,
        })
    }
}
