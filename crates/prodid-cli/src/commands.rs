use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use tracing::{info, info_span};

use prodid_core::generate_sequence;
use prodid_ingest::{SheetSource, list_sheets};
use prodid_model::ProductId;
use prodid_report::write_report;
use prodid_cli::pipeline::{AnalysisOutcome, run_analysis};
use prodid_cli::settings::{Settings, load_settings, save_settings};

use crate::cli::{AnalyzeArgs, SequenceArgs, SheetsArgs};
use crate::summary::apply_table_style;

/// What `analyze` produced and where the report went.
#[derive(Debug)]
pub struct AnalyzeResult {
    pub outcome: AnalysisOutcome,
    /// `None` for a dry run.
    pub report_path: Option<PathBuf>,
    pub settings_path: Option<PathBuf>,
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeResult> {
    let mut settings = load_settings(args.config.as_deref()).context("load settings")?;
    apply_overrides(&mut settings, args)?;

    let settings_path = if args.save_settings {
        Some(save_settings(&settings, args.config.as_deref()).context("save settings")?)
    } else {
        None
    };

    let config = settings.resolve()?;
    let span = info_span!("analyze", output = %config.output.display());
    let _guard = span.enter();

    let outcome = run_analysis(&config)?;
    let report_path = if args.dry_run {
        info!("dry run, report not written");
        print!("{}", outcome.report.render());
        None
    } else {
        write_report(&outcome.report, &config.output).context("write report")?;
        Some(config.output.clone())
    };

    Ok(AnalyzeResult {
        outcome,
        report_path,
        settings_path,
    })
}

/// Layer command-line selections over the loaded settings.
fn apply_overrides(settings: &mut Settings, args: &AnalyzeArgs) -> Result<()> {
    for (name, path) in &args.folders {
        settings.folders.insert(name.clone(), path.clone());
    }
    override_sheet(
        &mut settings.catalog,
        args.catalog.as_ref(),
        args.catalog_sheet.as_ref(),
        "--catalog-sheet",
    )?;
    override_sheet(
        &mut settings.inventory,
        args.inventory.as_ref(),
        args.inventory_sheet.as_ref(),
        "--inventory-sheet",
    )?;
    if let Some(output) = &args.output {
        settings.output = output.clone();
    }
    if args.require_identifiers {
        settings.require_identifiers = true;
    }
    Ok(())
}

/// A new workbook path drops the sheet chosen for the previous workbook.
fn override_sheet(
    current: &mut Option<SheetSource>,
    path: Option<&PathBuf>,
    sheet: Option<&String>,
    flag: &str,
) -> Result<()> {
    if let Some(path) = path {
        let kept_sheet = current
            .as_ref()
            .filter(|source| &source.path == path)
            .and_then(|source| source.sheet.clone());
        *current = Some(SheetSource::new(path.clone(), kept_sheet));
    }
    if let Some(sheet) = sheet {
        let Some(source) = current.as_mut() else {
            bail!("{flag} needs a workbook, none is configured");
        };
        source.sheet = Some(sheet.clone());
    }
    Ok(())
}

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let sheets = list_sheets(&args.file)
        .with_context(|| format!("list sheets of {}", args.file.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["#", "Sheet"]);
    apply_table_style(&mut table);
    for (idx, sheet) in sheets.into_iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), sheet]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_sequence(args: &SequenceArgs) -> Result<()> {
    let max = ProductId::parse(args.max.trim()).context("sequence ceiling")?;
    let sequence = generate_sequence(max.as_str());
    for id in &sequence {
        println!("{id}");
    }
    info!(ceiling = %max.canonical(), len = sequence.len(), "printed sequence");
    Ok(())
}
