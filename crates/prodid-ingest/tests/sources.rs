//! Tests for catalog and inventory extraction from CSV exports.

use std::fs;
use std::path::PathBuf;

use prodid_ingest::{
    IngestError, SheetSource, list_sheets, read_catalog_ids, read_inventory,
};
use tempfile::TempDir;

fn write_csv(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write csv");
    path
}

#[test]
fn catalog_drops_empty_cells() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "catalog.csv",
        "Name,Product ID\nVase,B2\nLamp,\nChair, a0 \n",
    );

    let ids = read_catalog_ids(&SheetSource::new(path, None)).expect("read catalog");

    assert_eq!(ids.as_slice(), &["B2", "a0"]);
}

#[test]
fn catalog_without_product_id_is_missing_required_field() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "catalog.csv", "Name,SKU\nVase,B2\n");

    let err = read_catalog_ids(&SheetSource::new(path, None)).expect_err("no column");

    assert!(matches!(
        err,
        IngestError::MissingRequiredField { ref field, .. } if field == "Product ID"
    ));
}

#[test]
fn inventory_keeps_racks_aligned_with_ids() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(
        &dir,
        "inventory.csv",
        "Product ID,Rack ID\nA0,R1\n,R2\nA0,\nB1,R4\n",
    );

    let inventory = read_inventory(&SheetSource::new(path, None)).expect("read inventory");

    assert_eq!(inventory.product_ids.as_slice(), &["A0", "A0", "B1"]);
    assert_eq!(
        inventory.racks,
        vec![Some("R1".to_string()), None, Some("R4".to_string())]
    );
}

#[test]
fn inventory_without_rack_column_has_unknown_racks() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "inventory.csv", "product id\nA0\nA1\n");

    let inventory = read_inventory(&SheetSource::new(path, None)).expect("read inventory");

    assert_eq!(inventory.product_ids.len(), 2);
    assert_eq!(inventory.racks, vec![None, None]);
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = TempDir::new().expect("temp dir");
    let source = SheetSource::new(dir.path().join("absent.xlsx"), Some("Sheet1".to_string()));

    let err = read_catalog_ids(&source).expect_err("missing file");

    assert!(matches!(err, IngestError::SourceUnavailable { .. }));
}

#[test]
fn csv_lists_a_single_sheet_named_after_the_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_csv(&dir, "stock.csv", "Product ID\nA0\n");

    assert_eq!(list_sheets(&path).expect("list sheets"), vec!["stock"]);
}
