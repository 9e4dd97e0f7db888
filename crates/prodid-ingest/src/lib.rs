pub mod error;
pub mod folders;
pub mod sources;
pub mod workbook;

pub use error::{IngestError, Result};
pub use folders::{
    DEFAULT_FOLDER_CATEGORIES, FolderSource, collect_folder_ids, extract_folder_ids,
    folder_identifier,
};
pub use sources::{
    InventorySheet, PRODUCT_ID_FIELD, RACK_ID_FIELD, read_catalog_ids, read_inventory,
};
pub use workbook::{SheetSource, SheetTable, list_sheets, read_sheet};
