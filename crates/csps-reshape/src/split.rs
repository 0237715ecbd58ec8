//! Code/label splitting on a stage-scoped delimiter.
//!
//! Source files encode `Demographic variable` and `Measure` columns as
//! `<code><delimiter><label>`; the delimiter varies by publication year
//! (`:`, `.`, sometimes a line break) and is supplied per batch.

use csps_model::{CellValue, Column, Result, Table};

/// Split `input_column` into `left_name`/`right_name` on the first
/// occurrence of any delimiter.
///
/// Only the first occurrence splits; later occurrences stay embedded in the
/// right-hand value, so labels that legitimately contain the delimiter
/// character survive intact. Both sides are trimmed. A cell with no
/// delimiter yields an empty code and the original, untrimmed value on the
/// right. Missing cells yield an empty code and a missing label.
///
/// The input column is removed and the two outputs are inserted at its
/// former position; all other columns keep their relative order.
pub fn split_column_on_delimiter(
    table: Table,
    input_column: &str,
    left_name: &str,
    right_name: &str,
    delimiters: &[String],
) -> Result<Table> {
    let mut table = table;
    let index = table.require_column_index(input_column)?;
    let column = table.columns.remove(index);
    let mut left = Vec::with_capacity(column.cells.len());
    let mut right = Vec::with_capacity(column.cells.len());
    for cell in column.cells {
        match cell {
            CellValue::Missing => {
                left.push(CellValue::text(""));
                right.push(CellValue::Missing);
            }
            CellValue::Text(text) => match find_first_delimiter(&text, delimiters) {
                Some((at, len)) => {
                    left.push(CellValue::text(text[..at].trim()));
                    right.push(CellValue::text(text[at + len..].trim()));
                }
                None => {
                    left.push(CellValue::text(""));
                    right.push(CellValue::Text(text));
                }
            },
        }
    }
    table.insert_column(index, Column::new(left_name, left));
    table.insert_column(index + 1, Column::new(right_name, right));
    Ok(table)
}

/// Leftmost occurrence of any delimiter, as (byte offset, delimiter length).
///
/// Delimiters are alternatives: the earliest match wins, and a same-offset
/// tie goes to the earlier-listed delimiter.
fn find_first_delimiter(text: &str, delimiters: &[String]) -> Option<(usize, usize)> {
    let mut found: Option<(usize, usize)> = None;
    for delimiter in delimiters {
        if delimiter.is_empty() {
            continue;
        }
        if let Some(at) = text.find(delimiter.as_str())
            && found.is_none_or(|(best, _)| at < best)
        {
            found = Some((at, delimiter.len()));
        }
    }
    found
}
