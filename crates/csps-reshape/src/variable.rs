//! Derived-from provenance extraction for demographic variable labels.
//!
//! Some variables carry a trailing parenthetical naming the source variable
//! they were computed from, e.g. `"Age group (derived from: date of birth)"`.
//! Only parentheticals that mention the phrase are split out; anything else
//! (`"Age (years)"`) is part of the label and stays put.

use std::sync::LazyLock;

use regex::Regex;

use csps_model::{CellValue, Column, Result, Table};

/// `<main text> (<parenthetical>)`, anchored, optional trailing whitespace.
static ANNOTATED_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\((.*?)\)\s*$").expect("annotated label pattern"));

static DERIVED_FROM_PHRASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)derived from").expect("derived-from pattern"));

/// Replace `input_column` with a label column (same name, same position)
/// and a provenance column named `derived_name` directly after it.
pub fn parse_variable_annotations(
    table: Table,
    input_column: &str,
    derived_name: &str,
) -> Result<Table> {
    let mut table = table;
    let index = table.require_column_index(input_column)?;
    let column = table.columns.remove(index);
    let mut labels = Vec::with_capacity(column.cells.len());
    let mut derived = Vec::with_capacity(column.cells.len());
    for cell in column.cells {
        match cell {
            CellValue::Missing => {
                labels.push(CellValue::Missing);
                derived.push(CellValue::text(""));
            }
            CellValue::Text(text) => {
                let (label, provenance) = split_variable_label(&text);
                labels.push(CellValue::Text(label));
                derived.push(CellValue::Text(provenance));
            }
        }
    }
    table.insert_column(index, Column::new(input_column, labels));
    table.insert_column(index + 1, Column::new(derived_name, derived));
    Ok(table)
}

/// Split one label into (label, provenance).
///
/// Malformed or absent parentheticals degrade to "no annotation": the
/// trimmed original becomes the label and provenance is empty.
fn split_variable_label(text: &str) -> (String, String) {
    let Some(captures) = ANNOTATED_LABEL.captures(text) else {
        return (text.trim().to_string(), String::new());
    };
    let main = captures.get(1).map_or("", |group| group.as_str());
    let inside = captures.get(2).map_or("", |group| group.as_str()).trim();
    if !DERIVED_FROM_PHRASE.is_match(inside) {
        // A parenthetical with no provenance is part of the label.
        return (text.trim().to_string(), String::new());
    }
    let stripped = DERIVED_FROM_PHRASE.replace_all(inside, "");
    let provenance = stripped.trim_matches([' ', ':', ',', '-']).to_string();
    (main.trim().to_string(), provenance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(value: &str) -> (String, String) {
        let table = Table::from_columns(vec![Column::from_texts("Name", [value])]);
        let table = parse_variable_annotations(table, "Name", "Derived from").expect("parse");
        (
            table.columns[0].cells[0].as_text().unwrap().to_string(),
            table.columns[1].cells[0].as_text().unwrap().to_string(),
        )
    }

    #[test]
    fn extracts_derived_from_provenance() {
        let (label, provenance) = parse_one("Age (derived from: DOB)");
        assert_eq!(label, "Age");
        assert_eq!(provenance, "DOB");
    }

    #[test]
    fn phrase_match_is_case_insensitive() {
        let (label, provenance) = parse_one("Grade group (Derived from - grade)");
        assert_eq!(label, "Grade group");
        assert_eq!(provenance, "grade");
    }

    #[test]
    fn keeps_unrelated_parentheticals_in_the_label() {
        let (label, provenance) = parse_one("Age (years)");
        assert_eq!(label, "Age (years)");
        assert_eq!(provenance, "");
    }

    #[test]
    fn plain_labels_pass_through_trimmed() {
        let (label, provenance) = parse_one("  Sexual orientation ");
        assert_eq!(label, "Sexual orientation");
        assert_eq!(provenance, "");
    }

    #[test]
    fn replaces_the_column_in_place() {
        let table = Table::from_columns(vec![
            Column::from_texts("Code", ["A1"]),
            Column::from_texts("Name", ["Age (derived from DOB)"]),
            Column::from_texts("Response", ["16-24"]),
        ]);
        let table = parse_variable_annotations(table, "Name", "Derived from").expect("parse");
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["Code", "Name", "Derived from", "Response"]
        );
        assert_eq!(table.columns[2].cells[0], CellValue::text("DOB"));
    }
}
