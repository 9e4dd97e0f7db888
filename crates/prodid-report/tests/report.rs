//! Report layout and output tests.

use std::fs;

use prodid_model::{DuplicateRecord, Finding, ReconciliationResult};
use prodid_report::{ReportInput, assemble, write_report};
use tempfile::TempDir;

fn result(findings: Vec<Finding>) -> ReconciliationResult {
    ReconciliationResult { findings }
}

#[test]
fn renders_four_sections() {
    let folders = result(vec![
        Finding::Missing("B1".to_string()),
        Finding::MiscasedMatch("A3".to_string()),
    ]);
    let excel = result(vec![
        Finding::Missing("a9".to_string()),
        Finding::Missing("A2".to_string()),
    ]);
    let inventory = result(vec![]);
    let duplicates = vec![
        DuplicateRecord {
            identifier: "C0".to_string(),
            location: "R2".to_string(),
        },
        DuplicateRecord {
            identifier: "C0".to_string(),
            location: "Unknown".to_string(),
        },
    ];

    let report = assemble(&ReportInput {
        missing_folders: &folders,
        missing_excel: &excel,
        missing_inventory: &inventory,
        duplicates: &duplicates,
    });

    insta::assert_snapshot!(report.render(), @r"
    -----------------Missing Folder Product IDs-----------
    A3 - (found in lowercase)
    B1
    -----------------Missing Excel Product IDs-----------
    A2
    a9

    -----------------Missing Inventory Product IDs-----------


    -----------------Duplicate Inventory Product IDs-----------
    C0 - (Duplicate entry / product present in rack R2)
    C0 - (Duplicate entry / product present in rack Unknown)
    ");
}

#[test]
fn write_replaces_previous_report() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("missing_product_ids.txt");
    fs::write(&path, "stale contents that are longer than the new report\n").expect("seed");

    let empty = ReconciliationResult::default();
    let report = assemble(&ReportInput {
        missing_folders: &empty,
        missing_excel: &empty,
        missing_inventory: &empty,
        duplicates: &[],
    });
    write_report(&report, &path).expect("write report");

    let written = fs::read_to_string(&path).expect("read report");
    assert_eq!(written, report.render());
    assert!(!written.contains("stale"));
    let leftovers = fs::read_dir(dir.path()).expect("list dir").count();
    assert_eq!(leftovers, 1);
}
