use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::assemble::Report;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to replace report {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the rendered report to `path` in one step.
///
/// The text goes to a temporary file next to `path` which is then renamed over
/// it, so readers see either the previous report or the complete new one.
pub fn write_report(report: &Report, path: &Path) -> Result<(), ReportError> {
    let io_error = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    let text = report.render();
    tmp.write_all(text.as_bytes()).map_err(io_error)?;
    tmp.as_file().sync_all().map_err(io_error)?;
    tmp.persist(path).map_err(|e| ReportError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    info!(
        path = %path.display(),
        entries = report.entry_count(),
        bytes = text.len(),
        "report written"
    );
    Ok(())
}
