use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Output: {}", result.output_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Source"),
        header_cell("Rows in"),
        header_cell("Records"),
        header_cell("Output"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_records = 0usize;
    for batch in &result.batches {
        total_records += batch.output_records;
        let output = match &batch.output_path {
            Some(path) => Cell::new(path.display()),
            None => dim_cell("-"),
        };
        let status = match &batch.error {
            Some(_) => Cell::new("FAILED")
                .fg(Color::Red)
                .add_attribute(Attribute::Bold),
            None => Cell::new("ok").fg(Color::Green),
        };
        table.add_row(vec![
            Cell::new(batch.year)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(batch.source.display()),
            Cell::new(batch.input_rows),
            Cell::new(batch.output_records),
            output,
            status,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_records).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
