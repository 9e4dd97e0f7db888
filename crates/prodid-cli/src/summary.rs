use anyhow::Result;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prodid_cli::pipeline::SourceSummary;

use crate::commands::AnalyzeResult;

pub fn print_summary(result: &AnalyzeResult) {
    match &result.report_path {
        Some(path) => println!("Report: {}", path.display()),
        None => println!("Report: (dry run, not written)"),
    }
    if let Some(path) = &result.settings_path {
        println!("Settings: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("IDs"),
        header_cell("Ceiling"),
        header_cell("Sequence"),
        header_cell("Missing"),
        header_cell("Miscased"),
        header_cell("Duplicates"),
        header_cell("Malformed"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    align_column(&mut table, 2, CellAlignment::Center);

    let mut total_missing = 0usize;
    let mut total_miscased = 0usize;
    for summary in &result.outcome.sources {
        total_missing += summary.missing;
        total_miscased += summary.miscased;
        table.add_row(vec![
            Cell::new(summary.source.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            identifiers_cell(summary.identifiers),
            ceiling_cell(summary),
            Cell::new(summary.sequence_len),
            count_cell(Some(summary.missing), Color::Red),
            count_cell(Some(summary.miscased), Color::Yellow),
            count_cell(summary.duplicates, Color::Magenta),
            count_cell(Some(summary.ceiling.malformed.len()), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        count_cell(Some(total_missing), Color::Red).add_attribute(Attribute::Bold),
        count_cell(Some(total_miscased), Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_summary_json(result: &AnalyzeResult) -> Result<()> {
    let value = serde_json::json!({
        "report_path": result.report_path,
        "settings_path": result.settings_path,
        "sources": result.outcome.sources,
        "report": result.outcome.report,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn identifiers_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new("empty")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count)
    }
}

fn ceiling_cell(summary: &SourceSummary) -> Cell {
    if summary.ceiling.defaulted {
        dim_cell(format!("{} (floor)", summary.ceiling.identifier))
    } else {
        Cell::new(&summary.ceiling.identifier)
    }
}

fn count_cell(count: Option<usize>, color: Color) -> Cell {
    match count {
        Some(value) if value > 0 => Cell::new(value).fg(color).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
