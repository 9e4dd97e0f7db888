//! Analysis pipeline with explicit stages.
//!
//! 1. **Extract**: Read folder, catalog and inventory identifiers
//! 2. **Reconcile**: Bound each source by its ceiling and compare against the canonical sequence
//! 3. **Duplicates**: Annotate repeated inventory entries with their rack
//! 4. **Assemble**: Build the four-section report in memory
//!
//! Writing the report is left to the caller so a dry run shares the same path.

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span, warn};

use prodid_core::{Ceiling, find_duplicates, generate_sequence, reconcile, select_ceiling};
use prodid_ingest::{
    FolderSource, IngestError, InventorySheet, SheetSource, collect_folder_ids, read_catalog_ids,
    read_inventory,
};
use prodid_model::{IdentifierSet, ReconciliationResult};
use prodid_report::{Report, ReportInput, assemble};

/// The three identifier sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Folders,
    Catalog,
    Inventory,
}

impl SourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Folders => "folders",
            Self::Catalog => "catalog",
            Self::Inventory => "inventory",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The source could not be read at all.
    #[error("failed to load {kind} source: {error}")]
    Source {
        kind: SourceKind,
        #[source]
        error: IngestError,
    },
    /// The source loaded but holds no product ids.
    #[error("{0} source yielded no product ids")]
    NoIdentifiers(SourceKind),
}

/// Immutable selection of sources, built once from settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub folders: Vec<FolderSource>,
    pub catalog: SheetSource,
    pub inventory: SheetSource,
    pub output: PathBuf,
    pub require_identifiers: bool,
}

// ============================================================================
// Stage 1: Extract
// ============================================================================

/// Raw identifiers of every source.
#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub folders: IdentifierSet,
    pub catalog: IdentifierSet,
    pub inventory: InventorySheet,
}

fn source_error(kind: SourceKind) -> impl Fn(IngestError) -> AnalysisError {
    move |error| AnalysisError::Source { kind, error }
}

fn check_identifiers(
    kind: SourceKind,
    ids: &IdentifierSet,
    require: bool,
) -> Result<(), AnalysisError> {
    if !ids.is_empty() {
        return Ok(());
    }
    if require {
        return Err(AnalysisError::NoIdentifiers(kind));
    }
    warn!(source = %kind, "source yielded no product ids, every id will be reported missing");
    Ok(())
}

/// Load every source. A load failure aborts; it never becomes an empty set.
pub fn extract(config: &AnalysisConfig) -> Result<Extracted, AnalysisError> {
    let folders =
        collect_folder_ids(&config.folders).map_err(source_error(SourceKind::Folders))?;
    check_identifiers(SourceKind::Folders, &folders, config.require_identifiers)?;

    let catalog = read_catalog_ids(&config.catalog).map_err(source_error(SourceKind::Catalog))?;
    check_identifiers(SourceKind::Catalog, &catalog, config.require_identifiers)?;

    let inventory =
        read_inventory(&config.inventory).map_err(source_error(SourceKind::Inventory))?;
    check_identifiers(
        SourceKind::Inventory,
        &inventory.product_ids,
        config.require_identifiers,
    )?;

    Ok(Extracted {
        folders,
        catalog,
        inventory,
    })
}

// ============================================================================
// Stages 2-4: Reconcile, Duplicates, Assemble
// ============================================================================

/// Per-source counts for the summary.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub source: SourceKind,
    pub identifiers: usize,
    pub ceiling: Ceiling,
    pub sequence_len: usize,
    pub missing: usize,
    pub miscased: usize,
    /// Only the inventory is checked for duplicates.
    pub duplicates: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub sources: Vec<SourceSummary>,
    pub report: Report,
}

impl AnalysisOutcome {
    pub fn has_findings(&self) -> bool {
        self.report.entry_count() > 0
    }
}

fn reconcile_source(
    kind: SourceKind,
    observed: &IdentifierSet,
) -> (ReconciliationResult, SourceSummary) {
    let ceiling = select_ceiling(observed);
    let canonical = generate_sequence(&ceiling.identifier);
    let result = reconcile(&canonical, observed);
    info!(
        source = %kind,
        identifiers = observed.len(),
        ceiling = %ceiling.identifier,
        missing = result.missing_count(),
        miscased = result.miscased_count(),
        "reconciled source"
    );
    let summary = SourceSummary {
        source: kind,
        identifiers: observed.len(),
        sequence_len: canonical.len(),
        missing: result.missing_count(),
        miscased: result.miscased_count(),
        duplicates: None,
        ceiling,
    };
    (result, summary)
}

/// Reconcile already-extracted sources and assemble the report.
pub fn analyze(extracted: &Extracted) -> AnalysisOutcome {
    let (missing_folders, folders) = reconcile_source(SourceKind::Folders, &extracted.folders);
    let (missing_excel, catalog) = reconcile_source(SourceKind::Catalog, &extracted.catalog);
    let (missing_inventory, mut inventory) =
        reconcile_source(SourceKind::Inventory, &extracted.inventory.product_ids);

    let duplicates = find_duplicates(
        &extracted.inventory.product_ids,
        &extracted.inventory.racks,
    );
    inventory.duplicates = Some(duplicates.len());

    let report = assemble(&ReportInput {
        missing_folders: &missing_folders,
        missing_excel: &missing_excel,
        missing_inventory: &missing_inventory,
        duplicates: &duplicates,
    });

    AnalysisOutcome {
        sources: vec![folders, catalog, inventory],
        report,
    }
}

/// Run every stage for `config`.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutcome, AnalysisError> {
    let extract_span = info_span!("extract", folders = config.folders.len());
    let extract_start = Instant::now();
    let extracted = extract_span.in_scope(|| extract(config))?;
    info!(
        folder_ids = extracted.folders.len(),
        catalog_ids = extracted.catalog.len(),
        inventory_ids = extracted.inventory.product_ids.len(),
        duration_ms = extract_start.elapsed().as_millis(),
        "extract complete"
    );

    let analyze_span = info_span!("analyze");
    let outcome = analyze_span.in_scope(|| analyze(&extracted));
    info!(
        entries = outcome.report.entry_count(),
        "analysis complete"
    );
    Ok(outcome)
}
