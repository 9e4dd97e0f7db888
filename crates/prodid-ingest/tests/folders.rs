//! Tests for category folder scanning.

use std::fs;

use prodid_ingest::{FolderSource, IngestError, collect_folder_ids};
use tempfile::TempDir;

fn category(root: &TempDir, name: &str, products: &[&str]) -> FolderSource {
    let path = root.path().join(name);
    fs::create_dir_all(&path).expect("create category");
    for product in products {
        fs::create_dir_all(path.join(product)).expect("create product folder");
    }
    FolderSource::new(name, path)
}

#[test]
fn concatenates_categories_in_configured_order() {
    let root = TempDir::new().expect("temp dir");
    let sources = vec![
        category(&root, "Sold", &["B1 Mug", "A0 Plate"]),
        category(&root, "To Sell", &["a2 Bowl", "-C9 draft", "B1 Mug copy"]),
    ];

    let ids = collect_folder_ids(&sources).expect("collect ids");

    assert_eq!(ids.as_slice(), &["A0", "B1", "B1", "a2"]);
}

#[test]
fn missing_category_fails_instead_of_yielding_empty() {
    let root = TempDir::new().expect("temp dir");
    let sources = vec![
        category(&root, "Sold", &["A0"]),
        FolderSource::new("Damaged", root.path().join("Damaged")),
    ];

    let err = collect_folder_ids(&sources).expect_err("missing folder");

    match err {
        IngestError::SourceUnavailable { path, .. } => {
            assert!(path.ends_with("Damaged"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_category_is_not_an_error() {
    let root = TempDir::new().expect("temp dir");
    let sources = vec![category(&root, "Personal", &[])];

    let ids = collect_folder_ids(&sources).expect("collect ids");

    assert!(ids.is_empty());
}
