//! Product id report generation.
//!
//! The report is a flat text file with four labeled sections:
//!
//! - **Missing Folder Product IDs**
//! - **Missing Excel Product IDs**
//! - **Missing Inventory Product IDs**
//! - **Duplicate Inventory Product IDs**
//!
//! It is built entirely in memory and written once.

mod assemble;
mod write;

pub use assemble::{Report, ReportInput, ReportSection, SectionKind, assemble};
pub use write::{ReportError, write_report};
