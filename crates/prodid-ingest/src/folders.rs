//! Identifier extraction from category folders.
//!
//! Each product lives in a subdirectory whose name starts with its identifier,
//! e.g. `B7 Blue ceramic vase`. Directories starting with `-` are excluded.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use prodid_model::IdentifierSet;

use crate::error::{IngestError, Result};

/// Category folder names used when no explicit list is configured.
pub const DEFAULT_FOLDER_CATEGORIES: [&str; 5] =
    ["Damaged", "Inventory", "Personal", "Sold", "To Sell"];

/// A named category folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderSource {
    pub category: String,
    pub path: PathBuf,
}

impl FolderSource {
    pub fn new(category: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            category: category.into(),
            path: path.into(),
        }
    }
}

/// Leading token of a product directory name, or `None` when the entry is excluded.
pub fn folder_identifier(name: &str) -> Option<&str> {
    if name.starts_with('-') {
        return None;
    }
    name.split_whitespace().next()
}

/// Lists identifiers of the immediate subdirectories of `dir`.
///
/// Entries are visited in filename order.
pub fn extract_folder_ids(dir: &Path) -> Result<IdentifierSet> {
    if !dir.is_dir() {
        return Err(IngestError::SourceUnavailable {
            path: dir.to_path_buf(),
            reason: "not a directory".to_string(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut dirs = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|e| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source: e,
        })?;
        if entry.path().is_dir() {
            dirs.push(entry.file_name());
        }
    }
    dirs.sort();

    let mut ids = IdentifierSet::new();
    for name in &dirs {
        let name = name.to_string_lossy();
        match folder_identifier(&name) {
            Some(id) => ids.push(id),
            None => debug!(folder = %name, "skipping excluded folder"),
        }
    }
    Ok(ids)
}

/// Concatenates the identifiers of every category folder.
pub fn collect_folder_ids(sources: &[FolderSource]) -> Result<IdentifierSet> {
    let mut all = IdentifierSet::new();
    for source in sources {
        let ids = extract_folder_ids(&source.path)?;
        info!(
            category = %source.category,
            path = %source.path.display(),
            count = ids.len(),
            "scanned category folder"
        );
        all.extend(ids);
    }
    Ok(all)
}
