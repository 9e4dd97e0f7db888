//! Column extraction for the catalog and inventory spreadsheets.

use tracing::info;

use prodid_model::IdentifierSet;

use crate::error::{IngestError, Result};
use crate::workbook::{SheetSource, SheetTable, read_sheet};

/// Column holding the product identifier. Required in both spreadsheets.
pub const PRODUCT_ID_FIELD: &str = "Product ID";

/// Column holding the inventory rack. Optional.
pub const RACK_ID_FIELD: &str = "Rack ID";

/// Inventory identifiers with the rack of each row, position-aligned.
#[derive(Debug, Clone, Default)]
pub struct InventorySheet {
    pub product_ids: IdentifierSet,
    pub racks: Vec<Option<String>>,
}

fn required_column(table: &SheetTable, source: &SheetSource, field: &str) -> Result<usize> {
    table
        .column_index(field)
        .ok_or_else(|| IngestError::MissingRequiredField {
            field: field.to_string(),
            path: source.path.clone(),
        })
}

/// Non-empty `Product ID` cells of the catalog sheet, in row order.
pub fn read_catalog_ids(source: &SheetSource) -> Result<IdentifierSet> {
    let table = read_sheet(source)?;
    let column = required_column(&table, source, PRODUCT_ID_FIELD)?;
    let ids: IdentifierSet = (0..table.rows.len())
        .filter_map(|row| table.cell(row, column))
        .collect();
    info!(
        path = %source.path.display(),
        sheet = %table.sheet,
        count = ids.len(),
        "read catalog product ids"
    );
    Ok(ids)
}

/// Inventory rows with a product id, each paired with its `Rack ID` cell.
///
/// A row without a product id is dropped together with its rack so positions
/// stay aligned. A sheet without a rack column yields `None` racks.
pub fn read_inventory(source: &SheetSource) -> Result<InventorySheet> {
    let table = read_sheet(source)?;
    let id_column = required_column(&table, source, PRODUCT_ID_FIELD)?;
    let rack_column = table.column_index(RACK_ID_FIELD);
    if rack_column.is_none() {
        info!(
            path = %source.path.display(),
            "no '{RACK_ID_FIELD}' column, racks will be reported as unknown"
        );
    }

    let mut inventory = InventorySheet::default();
    for row in 0..table.rows.len() {
        let Some(id) = table.cell(row, id_column) else {
            continue;
        };
        inventory.product_ids.push(id);
        inventory.racks.push(
            rack_column
                .and_then(|column| table.cell(row, column))
                .map(str::to_string),
        );
    }
    info!(
        path = %source.path.display(),
        sheet = %table.sheet,
        count = inventory.product_ids.len(),
        "read inventory product ids"
    );
    Ok(inventory)
}
