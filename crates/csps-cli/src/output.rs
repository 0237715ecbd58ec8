//! CSV output for the normalized long table.

use std::path::Path;

use anyhow::{Context, Result};

use csps_model::{CellValue, Table, columns};

/// Write the long table as CSV, dropping the `Notes` column.
///
/// Notes are working metadata for the reshape, not part of the stored
/// record set. Missing cells are written as empty fields.
pub fn write_long_table(table: &Table, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("write output: {}", path.display()))?;
    let kept: Vec<usize> = (0..table.width())
        .filter(|&at| table.columns[at].name != columns::NOTES)
        .collect();
    writer
        .write_record(kept.iter().map(|&at| table.columns[at].name.as_str()))
        .context("write header")?;
    for row in 0..table.height() {
        let record = kept.iter().map(|&at| {
            table.columns[at]
                .cells
                .get(row)
                .and_then(CellValue::as_text)
                .unwrap_or("")
        });
        writer
            .write_record(record)
            .with_context(|| format!("write row {row}"))?;
    }
    writer.flush().context("flush output")?;
    Ok(())
}
