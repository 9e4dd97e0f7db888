//! Sheet loading for workbooks (via `calamine`) and CSV exports (via `csv`).

use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use csv::ReaderBuilder;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// A spreadsheet file plus the sheet to read from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetSource {
    pub path: PathBuf,
    /// Sheet name; the first sheet is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheet: Option<String>,
}

impl SheetSource {
    pub fn new(path: impl Into<PathBuf>, sheet: Option<String>) -> Self {
        Self {
            path: path.into(),
            sheet,
        }
    }
}

/// One sheet loaded into memory. Empty cells are `None`.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub sheet: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SheetTable {
    /// Index of the header matching `name`, ignoring case and repeated whitespace.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(&wanted))
    }

    /// Cell at (`row`, `column`), `None` when empty or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Formats a floating-point cell without trailing zeros (`5.0` -> `5`).
fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => normalize_cell(s),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::Int(v) => Some(v.to_string()),
        Data::Bool(v) => Some(v.to_string()),
        other => normalize_cell(&other.to_string()),
    }
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        })
    }
}

fn csv_sheet_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("csv")
        .to_string()
}

/// Lists the sheet names of a workbook. A CSV file has one sheet named after its stem.
pub fn list_sheets(path: &Path) -> Result<Vec<String>> {
    ensure_file(path)?;
    if is_csv(path) {
        return Ok(vec![csv_sheet_name(path)]);
    }
    let workbook = open_workbook_auto(path).map_err(|e| IngestError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    Ok(workbook.sheet_names())
}

/// Loads the configured sheet of `source`.
pub fn read_sheet(source: &SheetSource) -> Result<SheetTable> {
    ensure_file(&source.path)?;
    let table = if is_csv(&source.path) {
        read_csv_sheet(&source.path)?
    } else {
        read_workbook_sheet(&source.path, source.sheet.as_deref())?
    };
    debug!(
        path = %source.path.display(),
        sheet = %table.sheet,
        columns = table.headers.len(),
        rows = table.rows.len(),
        "loaded sheet"
    );
    Ok(table)
}

fn read_csv_sheet(path: &Path) -> Result<SheetTable> {
    let csv_error = |source| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.iter().all(String::is_empty) {
        return Err(IngestError::NoHeaderRow {
            path: path.to_path_buf(),
            sheet: csv_sheet_name(path),
        });
    }

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_error)?;
        rows.push(record.iter().map(normalize_cell).collect());
    }

    Ok(SheetTable {
        sheet: csv_sheet_name(path),
        headers,
        rows,
    })
}

fn read_workbook_sheet(path: &Path, sheet: Option<&str>) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::SourceUnavailable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let available = workbook.sheet_names();
    let used_sheet = match sheet {
        Some(name) => available
            .iter()
            .find(|candidate| candidate.as_str() == name)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: name.to_string(),
                available: available.clone(),
            })?,
        None => {
            let first = available.first().cloned().ok_or_else(|| IngestError::NoWorksheet {
                path: path.to_path_buf(),
            })?;
            info!(
                path = %path.display(),
                sheet = %first,
                "no sheet configured, using first sheet"
            );
            first
        }
    };

    let range = workbook
        .worksheet_range(&used_sheet)
        .map_err(|e| IngestError::SourceUnavailable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    let mut rows_iter = range.rows();
    let header_row = rows_iter.next().ok_or_else(|| IngestError::NoHeaderRow {
        path: path.to_path_buf(),
        sheet: used_sheet.clone(),
    })?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| {
            cell_to_string(cell)
                .map(|h| normalize_header(&h))
                .unwrap_or_default()
        })
        .collect();
    let rows: Vec<Vec<Option<String>>> = rows_iter
        .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>())
        .collect();

    Ok(SheetTable {
        sheet: used_sheet,
        headers,
        rows,
    })
}
