//! End-to-end pipeline runs over temporary folders and CSV sheets.

use std::fs;
use std::path::{Path, PathBuf};

use prodid_cli::pipeline::{AnalysisConfig, AnalysisError, SourceKind, run_analysis};
use prodid_ingest::{FolderSource, SheetSource};
use prodid_report::{SectionKind, write_report};
use tempfile::TempDir;

fn make_dirs(root: &Path, names: &[&str]) {
    for name in names {
        fs::create_dir_all(root.join(name)).expect("create dir");
    }
}

struct Fixture {
    _dir: TempDir,
    config: AnalysisConfig,
}

fn fixture(inventory_csv: &str) -> Fixture {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();

    let sold = root.join("Sold");
    let to_sell = root.join("To Sell");
    make_dirs(&sold, &["A0 Chair", "a1 Lamp", "-A2 archived"]);
    make_dirs(&to_sell, &["A3 Vase"]);

    let catalog = root.join("catalog.csv");
    fs::write(&catalog, "Product ID,Name\nA0,Chair\nA1,Lamp\n,Blank\nA2,Rug\n").expect("catalog");
    let inventory = root.join("inventory.csv");
    fs::write(&inventory, inventory_csv).expect("inventory");

    let config = AnalysisConfig {
        folders: vec![
            FolderSource::new("Sold", sold),
            FolderSource::new("To Sell", to_sell),
        ],
        catalog: SheetSource::new(catalog, None),
        inventory: SheetSource::new(inventory, None),
        output: root.join("missing_product_ids.txt"),
        require_identifiers: false,
    };
    Fixture { _dir: dir, config }
}

fn lines(outcome: &prodid_cli::pipeline::AnalysisOutcome, kind: SectionKind) -> Vec<String> {
    outcome
        .report
        .section(kind)
        .map(|section| section.lines.clone())
        .unwrap_or_default()
}

#[test]
fn reports_every_section() {
    let fx = fixture("Product ID,Rack ID\nA0,R1\nA2,R2\nA0,\n");
    let outcome = run_analysis(&fx.config).expect("analysis");

    assert_eq!(
        lines(&outcome, SectionKind::MissingFolders),
        vec!["A1 - (found in lowercase)", "A2"]
    );
    assert!(lines(&outcome, SectionKind::MissingExcel).is_empty());
    assert_eq!(lines(&outcome, SectionKind::MissingInventory), vec!["A1"]);
    assert_eq!(
        lines(&outcome, SectionKind::DuplicateInventory),
        vec![
            "A0 - (Duplicate entry / product present in rack R1)",
            "A0 - (Duplicate entry / product present in rack Unknown)",
        ]
    );
    assert!(outcome.has_findings());

    let folders = &outcome.sources[0];
    assert_eq!(folders.source, SourceKind::Folders);
    assert_eq!(folders.identifiers, 3);
    assert_eq!(folders.ceiling.identifier, "A3");
    assert_eq!(folders.sequence_len, 4);
    assert_eq!(outcome.sources[2].duplicates, Some(2));
}

#[test]
fn written_report_matches_rendering() {
    let fx = fixture("Product ID,Rack ID\nA0,R1\nA1,R1\nA2,R2\n");
    let outcome = run_analysis(&fx.config).expect("analysis");
    write_report(&outcome.report, &fx.config.output).expect("write");

    let written = fs::read_to_string(&fx.config.output).expect("read report");
    assert_eq!(written, outcome.report.render());
    assert!(written.starts_with("-----------------Missing Folder Product IDs-----------\n"));
    assert!(written.contains("\n\n-----------------Duplicate Inventory Product IDs-----------\n"));
}

#[test]
fn empty_inventory_reports_floor_as_missing() {
    let fx = fixture("Product ID,Rack ID\n");
    let outcome = run_analysis(&fx.config).expect("analysis");

    let inventory = &outcome.sources[2];
    assert!(inventory.ceiling.defaulted);
    assert_eq!(inventory.ceiling.identifier, "A0");
    assert_eq!(lines(&outcome, SectionKind::MissingInventory), vec!["A0"]);
}

#[test]
fn empty_source_fails_when_identifiers_are_required() {
    let mut fx = fixture("Product ID,Rack ID\n");
    fx.config.require_identifiers = true;
    let err = run_analysis(&fx.config).unwrap_err();
    assert!(matches!(err, AnalysisError::NoIdentifiers(SourceKind::Inventory)));
}

#[test]
fn missing_folder_aborts_instead_of_reporting_everything() {
    let mut fx = fixture("Product ID,Rack ID\nA0,R1\n");
    fx.config
        .folders
        .push(FolderSource::new("Damaged", PathBuf::from("/nonexistent/prodid/Damaged")));
    let err = run_analysis(&fx.config).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Source {
            kind: SourceKind::Folders,
            ..
        }
    ));
    assert!(err.to_string().starts_with("failed to load folders source"));
}

#[test]
fn inventory_without_product_column_is_rejected() {
    let fx = fixture("SKU,Rack ID\nA0,R1\n");
    let err = run_analysis(&fx.config).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::Source {
            kind: SourceKind::Inventory,
            ..
        }
    ));
}

#[test]
fn source_summaries_serialize_for_json_output() {
    let fx = fixture("Product ID,Rack ID\nA0,R1\nA2,R2\nA0,\n");
    let outcome = run_analysis(&fx.config).expect("analysis");
    let json = serde_json::to_string_pretty(&outcome.sources).expect("serialize summaries");

    insta::assert_snapshot!(json, @r#"
    [
      {
        "source": "folders",
        "identifiers": 3,
        "ceiling": {
          "identifier": "A3",
          "defaulted": false,
          "malformed": []
        },
        "sequence_len": 4,
        "missing": 1,
        "miscased": 1,
        "duplicates": null
      },
      {
        "source": "catalog",
        "identifiers": 3,
        "ceiling": {
          "identifier": "A2",
          "defaulted": false,
          "malformed": []
        },
        "sequence_len": 3,
        "missing": 0,
        "miscased": 0,
        "duplicates": null
      },
      {
        "source": "inventory",
        "identifiers": 3,
        "ceiling": {
          "identifier": "A2",
          "defaulted": false,
          "malformed": []
        },
        "sequence_len": 3,
        "missing": 1,
        "miscased": 0,
        "duplicates": 2
      }
    ]
    "#);
}
