//! CLI argument definitions for `prodid`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prodid",
    version,
    about = "Find missing, miscased and duplicate product ids",
    long_about = "Reconcile product ids found in category folders, a catalog workbook and an \
                  inventory workbook against the dense id space A0..ZZ.\n\n\
                  Writes a four-section text report: missing folder ids, missing catalog \
                  ids, missing inventory ids and duplicate inventory ids."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include timestamps in log lines.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile all sources and write the report.
    Analyze(AnalyzeArgs),

    /// List the sheets of a workbook.
    Sheets(SheetsArgs),

    /// Print the canonical id sequence up to a ceiling.
    Sequence(SequenceArgs),
}

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Settings file (default: platform config folder).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Category folder as NAME=PATH (repeatable, overrides the settings file).
    #[arg(long = "folder", value_name = "NAME=PATH", value_parser = parse_folder_arg)]
    pub folders: Vec<(String, PathBuf)>,

    /// Catalog workbook holding a "Product ID" column.
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Sheet of the catalog workbook (default: first sheet).
    #[arg(long = "catalog-sheet", value_name = "NAME")]
    pub catalog_sheet: Option<String>,

    /// Inventory workbook holding "Product ID" and optionally "Rack ID" columns.
    #[arg(long = "inventory", value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Sheet of the inventory workbook (default: first sheet).
    #[arg(long = "inventory-sheet", value_name = "NAME")]
    pub inventory_sheet: Option<String>,

    /// Report destination (default: missing_product_ids.txt).
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Persist the effective selections back to the settings file.
    #[arg(long = "save-settings")]
    pub save_settings: bool,

    /// Print the report to stdout instead of writing it.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Summary format.
    #[arg(long = "summary", value_enum, default_value = "table")]
    pub summary: SummaryFormatArg,

    /// Fail when a source loads but contains no product ids.
    #[arg(long = "require-identifiers")]
    pub require_identifiers: bool,

    /// Exit with status 2 when the report has any entry.
    #[arg(long = "fail-on-findings")]
    pub fail_on_findings: bool,
}

#[derive(Args)]
pub struct SheetsArgs {
    /// Workbook (xlsx, xlsm, xls, ods) or CSV file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct SequenceArgs {
    /// Highest id to include, e.g. B5.
    #[arg(value_name = "MAX")]
    pub max: String,
}

fn parse_folder_arg(raw: &str) -> Result<(String, PathBuf), String> {
    let (name, path) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=PATH, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() || path.is_empty() {
        return Err(format!("expected NAME=PATH, got '{raw}'"));
    }
    Ok((name.to_string(), PathBuf::from(path)))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
