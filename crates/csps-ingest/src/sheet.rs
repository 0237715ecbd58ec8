//! Sheet loading for results files exported as CSV.
//!
//! Results workbooks are exported one sheet per CSV file. Every sheet opens
//! with a preamble (title, publication date) before the header row; the
//! per-batch configuration says how many rows to skip. Suppressed values are
//! published as a marker token (`[c]`) and become missing cells.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use csps_model::{CellValue, Column, Table};

/// Reading options for one sheet.
#[derive(Debug, Clone, Default)]
pub struct SheetOptions {
    /// Preamble rows to skip before the header row.
    pub skip_rows: usize,
    /// Cell tokens treated as missing (matched against the trimmed cell).
    pub na_values: Vec<String>,
}

/// Read one CSV sheet into a table.
///
/// The first row after the skipped preamble is the header; headers keep
/// their surrounding whitespace (the reshape sanitizer owns trimming) and
/// only lose a leading BOM. Data rows shorter than the header are padded
/// with missing cells, fully empty rows are dropped, and empty or NA-marker
/// cells become [`CellValue::Missing`].
pub fn read_sheet(path: &Path, options: &SheetOptions) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read sheet: {}", path.display()))?;
    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        raw_rows.push(record.iter().map(ToString::to_string).collect());
    }

    let mut remaining = raw_rows.into_iter().skip(options.skip_rows);
    let Some(header_row) = remaining.next() else {
        debug!(path = %path.display(), "sheet has no rows after preamble");
        return Ok(Table::new());
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|header| header.trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut cells: Vec<Vec<CellValue>> = headers.iter().map(|_| Vec::new()).collect();
    let mut height = 0usize;
    for row in remaining {
        if row.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        height += 1;
        for (at, column) in cells.iter_mut().enumerate() {
            let value = row.get(at).map(String::as_str).unwrap_or("");
            column.push(normalize_cell(value, &options.na_values));
        }
    }

    debug!(path = %path.display(), columns = headers.len(), rows = height, "read sheet");
    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    Ok(Table::from_columns(columns))
}

fn normalize_cell(raw: &str, na_values: &[String]) -> CellValue {
    let value = raw.trim_start_matches('\u{feff}');
    let trimmed = value.trim();
    if trimmed.is_empty() || na_values.iter().any(|marker| marker == trimmed) {
        CellValue::Missing
    } else {
        CellValue::Text(value.to_string())
    }
}
