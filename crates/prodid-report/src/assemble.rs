use serde::Serialize;

use prodid_model::{DuplicateRecord, ReconciliationResult, sort_case_insensitive};

const RULE_PREFIX: &str = "-----------------";
const RULE_SUFFIX: &str = "-----------";

/// Report sections, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    MissingFolders,
    MissingExcel,
    MissingInventory,
    DuplicateInventory,
}

impl SectionKind {
    pub const ALL: [SectionKind; 4] = [
        Self::MissingFolders,
        Self::MissingExcel,
        Self::MissingInventory,
        Self::DuplicateInventory,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            Self::MissingFolders => "Missing Folder Product IDs",
            Self::MissingExcel => "Missing Excel Product IDs",
            Self::MissingInventory => "Missing Inventory Product IDs",
            Self::DuplicateInventory => "Duplicate Inventory Product IDs",
        }
    }

    /// Inventory sections are separated from the previous block by a blank line.
    const fn leading_blank_line(self) -> bool {
        matches!(self, Self::MissingInventory | Self::DuplicateInventory)
    }
}

/// A titled block of entries, already sorted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection {
    pub kind: SectionKind,
    pub lines: Vec<String>,
}

impl ReportSection {
    fn new(kind: SectionKind, mut lines: Vec<String>) -> Self {
        sort_case_insensitive(&mut lines);
        Self { kind, lines }
    }
}

/// Everything the report is built from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub missing_folders: &'a ReconciliationResult,
    pub missing_excel: &'a ReconciliationResult,
    pub missing_inventory: &'a ReconciliationResult,
    pub duplicates: &'a [DuplicateRecord],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn section(&self, kind: SectionKind) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|section| section.lines.len()).sum()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            if section.kind.leading_blank_line() {
                out.push('\n');
            }
            out.push_str(RULE_PREFIX);
            out.push_str(section.kind.title());
            out.push_str(RULE_SUFFIX);
            out.push('\n');
            out.push_str(&section.lines.join("\n"));
            out.push('\n');
        }
        out
    }
}

/// Build the four-section report. Each section is sorted case-insensitively.
pub fn assemble(input: &ReportInput<'_>) -> Report {
    let duplicates = input.duplicates.iter().map(ToString::to_string).collect();
    Report {
        sections: vec![
            ReportSection::new(
                SectionKind::MissingFolders,
                input.missing_folders.report_lines(),
            ),
            ReportSection::new(SectionKind::MissingExcel, input.missing_excel.report_lines()),
            ReportSection::new(
                SectionKind::MissingInventory,
                input.missing_inventory.report_lines(),
            ),
            ReportSection::new(SectionKind::DuplicateInventory, duplicates),
        ],
    }
}
