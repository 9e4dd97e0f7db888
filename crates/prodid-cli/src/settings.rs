//! Persisted source selections.
//!
//! Settings are stored as TOML. Without `--config` the platform config folder is used:
//! - macOS: ~/Library/Application Support/com.prodid.prodid/
//! - Windows: %APPDATA%/prodid/prodid/config/
//! - Linux: ~/.config/prodid/
//!
//! ```toml
//! output = "missing_product_ids.txt"
//!
//! [folders]
//! Sold = "/stock/Sold"
//! "To Sell" = "/stock/To Sell"
//!
//! [catalog]
//! path = "/stock/catalog.xlsx"
//! sheet = "Products"
//!
//! [inventory]
//! path = "/stock/inventory.xlsx"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use prodid_ingest::{DEFAULT_FOLDER_CATEGORIES, FolderSource, SheetSource};

use crate::pipeline::AnalysisConfig;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "prodid";
const APP_NAME: &str = "prodid";
const CONFIG_FILENAME: &str = "settings.toml";

/// Report file written when no output is configured.
pub const DEFAULT_REPORT_FILENAME: &str = "missing_product_ids.txt";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not determine the settings directory")]
    NoConfigDir,
    #[error("failed to read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to write settings {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("incomplete configuration, missing: {}", .missing.join(", "))]
    Incomplete { missing: Vec<String> },
}

/// Source selections and output location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Report destination.
    pub output: PathBuf,
    /// Fail when a source loads but contains no product ids.
    pub require_identifiers: bool,
    /// Folder categories that must have a path before analysis runs.
    pub required_categories: Vec<String>,
    /// Category name to folder path.
    pub folders: BTreeMap<String, PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<SheetSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory: Option<SheetSource>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_REPORT_FILENAME),
            require_identifiers: false,
            required_categories: DEFAULT_FOLDER_CATEGORIES.map(String::from).to_vec(),
            folders: BTreeMap::new(),
            catalog: None,
            inventory: None,
        }
    }
}

impl Settings {
    /// Validate that every source is selected and freeze the selection.
    pub fn resolve(&self) -> Result<AnalysisConfig, SettingsError> {
        let mut missing = Vec::new();
        for category in &self.required_categories {
            if !self.folders.contains_key(category) {
                missing.push(format!("folder '{category}'"));
            }
        }
        if self.folders.is_empty() && self.required_categories.is_empty() {
            missing.push("at least one folder".to_string());
        }
        if self.catalog.is_none() {
            missing.push("catalog workbook".to_string());
        }
        if self.inventory.is_none() {
            missing.push("inventory workbook".to_string());
        }
        let (Some(catalog), Some(inventory), true) =
            (&self.catalog, &self.inventory, missing.is_empty())
        else {
            return Err(SettingsError::Incomplete { missing });
        };

        Ok(AnalysisConfig {
            folders: self
                .folders
                .iter()
                .map(|(category, path)| FolderSource::new(category.clone(), path.clone()))
                .collect(),
            catalog: catalog.clone(),
            inventory: inventory.clone(),
            output: self.output.clone(),
            require_identifiers: self.require_identifiers,
        })
    }
}

/// Get the default path of the settings file.
///
/// Returns `None` if the platform-specific directory cannot be determined.
pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Read settings from `path`; `Ok(None)` when the file does not exist.
pub fn read_settings(path: &Path) -> Result<Option<Settings>, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(SettingsError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    toml::from_str(&content)
        .map(Some)
        .map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Load settings.
///
/// An explicit path must parse. The default location falls back to defaults
/// with a warning when it is missing or unreadable.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    if let Some(path) = explicit {
        let settings = read_settings(path)?.unwrap_or_default();
        tracing::info!("Loaded settings from {:?}", path);
        return Ok(settings);
    }

    let Some(path) = settings_path() else {
        tracing::warn!("Could not determine settings path, using defaults");
        return Ok(Settings::default());
    };

    match read_settings(&path) {
        Ok(Some(settings)) => {
            tracing::info!("Loaded settings from {:?}", path);
            Ok(settings)
        }
        Ok(None) => {
            tracing::info!("No settings file found at {:?}, using defaults", path);
            Ok(Settings::default())
        }
        Err(e) => {
            tracing::warn!("{e}, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Save settings to `explicit` or the default location.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_settings(
    settings: &Settings,
    explicit: Option<&Path>,
) -> Result<PathBuf, SettingsError> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => settings_path().ok_or(SettingsError::NoConfigDir)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Write {
            path: path.clone(),
            source: e,
        })?;
    }

    let content = toml::to_string_pretty(settings)?;
    fs::write(&path, content).map_err(|e| SettingsError::Write {
        path: path.clone(),
        source: e,
    })?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(path)
}
