//! Spreadsheet rows and CSV serialization
//!
//! Exports build a list of [`CsvRow`]s (ordered column name to value maps)
//! and hand them to [`write_csv`]. Columns are the union of every row's
//! columns in first-appearance order. List-valued columns named in `unpack`
//! are spread over one cell per element, so a spreadsheet can filter on
//! them; other lists are joined into a single cell.

use std::io::Write;

use crate::error::{SheetsError, SheetsResult};

/// A single cell value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvValue {
    Empty,
    Text(String),
    Number(i64),
    Bool(bool),
    List(Vec<String>),
}

impl CsvValue {
    /// Render as a single cell
    fn to_cell(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(n) => n.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::List(items) => items.join(", "),
        }
    }

    fn list_len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            _ => 0,
        }
    }
}

impl From<&str> for CsvValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for CsvValue {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for CsvValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for CsvValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<bool> for CsvValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Vec<String>> for CsvValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Empty)
    }
}

/// One spreadsheet row: column name to value, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRow {
    cells: Vec<(String, CsvValue)>,
}

impl CsvRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column, replacing its value in place if already present
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CsvValue>) {
        let column = column.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(c, _)| *c == column) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((column, value)),
        }
    }

    /// Builder-style [`CsvRow::set`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CsvValue>) -> Self {
        self.set(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CsvValue> {
        self.cells.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(c, _)| c.as_str())
    }
}

/// Resolved output layout for a set of rows
struct Layout<'a> {
    /// (column name, number of cells it spans; 0 means a single plain cell)
    columns: Vec<(&'a str, usize)>,
}

impl<'a> Layout<'a> {
    fn new(rows: &'a [CsvRow], unpack: &[&str]) -> Self {
        let mut columns: Vec<(&str, usize)> = Vec::new();
        for row in rows {
            for (name, value) in &row.cells {
                let width = if unpack.contains(&name.as_str()) {
                    value.list_len().max(1)
                } else {
                    0
                };
                match columns.iter_mut().find(|(c, _)| *c == name.as_str()) {
                    Some(col) => col.1 = col.1.max(width),
                    None => columns.push((name.as_str(), width)),
                }
            }
        }
        Self { columns }
    }

    fn headers(&self) -> Vec<String> {
        let mut headers = Vec::new();
        for &(name, width) in &self.columns {
            if width == 0 {
                headers.push(name.to_string());
            } else {
                headers.extend((0..width).map(|i| format!("{} {}", name, i)));
            }
        }
        headers
    }

    fn cells(&self, row: &CsvRow) -> Vec<String> {
        let mut cells = Vec::new();
        for &(name, width) in &self.columns {
            let value = row.get(name);
            if width == 0 {
                cells.push(value.map(CsvValue::to_cell).unwrap_or_default());
                continue;
            }
            let items: Vec<String> = match value {
                Some(CsvValue::List(items)) => items.clone(),
                Some(CsvValue::Empty) | None => Vec::new(),
                Some(other) => vec![other.to_cell()],
            };
            cells.extend((0..width).map(|i| items.get(i).cloned().unwrap_or_default()));
        }
        cells
    }
}

/// Serialize rows to CSV, spreading the `unpack` columns over multiple cells
///
/// Nothing is written when there are no rows.
pub fn write_csv<W: Write>(writer: W, rows: &[CsvRow], unpack: &[&str]) -> SheetsResult<()> {
    if rows.is_empty() {
        return Ok(());
    }

    let layout = Layout::new(rows, unpack);
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(layout.headers())?;
    for row in rows {
        csv_writer.write_record(layout.cells(row))?;
    }

    csv_writer
        .flush()
        .map_err(|e| SheetsError::Export(e.to_string()))?;

    Ok(())
}
