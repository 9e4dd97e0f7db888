//! Error types for identifier extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a source.
///
/// A source that loads but contains no identifiers is not an error here.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Source Errors ===
    /// Path missing, not the expected kind, or not openable.
    #[error("source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Workbook Errors ===
    /// Requested sheet does not exist in the workbook.
    #[error("sheet '{sheet}' not found in {path} (available: {})", .available.join(", "))]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: Vec<String>,
    },

    /// Workbook contains no sheets.
    #[error("workbook has no worksheet: {path}")]
    NoWorksheet { path: PathBuf },

    /// Sheet has no header row.
    #[error("sheet '{sheet}' in {path} has no header row")]
    NoHeaderRow { path: PathBuf, sheet: String },

    /// Required column not present in the header row.
    #[error("required field '{field}' not found in {path}")]
    MissingRequiredField { field: String, path: PathBuf },

    // === CSV Errors ===
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingRequiredField {
            field: "Product ID".to_string(),
            path: PathBuf::from("/data/catalog.xlsx"),
        };
        assert_eq!(
            err.to_string(),
            "required field 'Product ID' not found in /data/catalog.xlsx"
        );
    }

    #[test]
    fn test_sheet_not_found_lists_available() {
        let err = IngestError::SheetNotFound {
            path: PathBuf::from("inv.xlsx"),
            sheet: "Stock".to_string(),
            available: vec!["Sheet1".to_string(), "Archive".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "sheet 'Stock' not found in inv.xlsx (available: Sheet1, Archive)"
        );
    }
}
