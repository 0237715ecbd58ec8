//! Wide-to-long unpivoting of measure columns.

use csps_model::{CellValue, Column, Table, columns};

/// Melt every non-identifier column into (Measure, Value) row pairs.
///
/// Identifier columns are the ones present from the fixed set
/// [`columns::IDENTIFIER_COLUMNS`], carried in that order; every other
/// column is a measure. One output row is produced per (input row, measure
/// column), grouped by input row and then by original measure-column order.
pub fn unpivot(table: &Table) -> Table {
    let identifiers: Vec<usize> = columns::IDENTIFIER_COLUMNS
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();
    let measures: Vec<usize> =
        (0..table.width()).filter(|at| !identifiers.contains(at)).collect();

    let height = table.height();
    let capacity = height * measures.len();
    let mut out: Vec<Column> = identifiers
        .iter()
        .map(|&at| Column::new(table.columns[at].name.clone(), Vec::with_capacity(capacity)))
        .collect();
    let mut measure_cells = Vec::with_capacity(capacity);
    let mut value_cells = Vec::with_capacity(capacity);

    for row in 0..height {
        for &at in &measures {
            for (slot, &id) in identifiers.iter().enumerate() {
                out[slot].cells.push(cell_at(table, id, row));
            }
            measure_cells.push(CellValue::text(table.columns[at].name.clone()));
            value_cells.push(cell_at(table, at, row));
        }
    }

    out.push(Column::new(columns::MEASURE, measure_cells));
    out.push(Column::new(columns::VALUE, value_cells));
    Table::from_columns(out)
}

fn cell_at(table: &Table, column: usize, row: usize) -> CellValue {
    table.columns[column]
        .cells
        .get(row)
        .cloned()
        .unwrap_or(CellValue::Missing)
}
