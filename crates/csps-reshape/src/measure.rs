//! Definition extraction from measure labels.
//!
//! Measure labels embed definitional parentheticals, sometimes several and
//! sometimes nested: `"Engagement index (mean of B01-B05 (weighted))"`. The
//! scanner walks the label once, tracking bracket depth, and treats each
//! top-level span as one definition unit; nested brackets are never split
//! out separately. Spans that open with an illustrative marker (`e.g.`,
//! `for example`) are not definitions and stay embedded in the label.

use std::sync::LazyLock;

use regex::Regex;

use csps_model::{CellValue, Column, Result, Table};

/// Illustrative span marker at the start of the content, followed by
/// end-of-content or whitespace/`:`/`,`.
static ILLUSTRATIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:e\.?g\.?|for\s+example)(?:$|[\s:,])").expect("illustrative marker pattern")
});

/// Replace `input_column` with a cleaned label column (same name, same
/// position) and a definition column named `definition_name` after it.
pub fn parse_measure_annotations(
    table: Table,
    input_column: &str,
    definition_name: &str,
) -> Result<Table> {
    let mut table = table;
    let index = table.require_column_index(input_column)?;
    let column = table.columns.remove(index);
    let mut labels = Vec::with_capacity(column.cells.len());
    let mut definitions = Vec::with_capacity(column.cells.len());
    for cell in column.cells {
        match cell {
            CellValue::Missing => {
                labels.push(CellValue::Missing);
                definitions.push(CellValue::text(""));
            }
            CellValue::Text(text) => {
                let (label, definition) = split_measure_label(&text);
                labels.push(CellValue::Text(label));
                definitions.push(CellValue::Text(definition));
            }
        }
    }
    table.insert_column(index, Column::new(input_column, labels));
    table.insert_column(index + 1, Column::new(definition_name, definitions));
    Ok(table)
}

/// A top-level parenthetical span: byte offsets spanning both brackets,
/// plus the trimmed inner content.
struct DefinitionSpan {
    start: usize,
    end: usize,
    content: String,
}

/// Split one label into (cleaned label, joined definitions).
///
/// Extracted spans are removed left to right and their contents joined with
/// `"; "`; an empty parenthetical still contributes its (empty) fragment.
/// Unbalanced closers push the depth negative and suppress capture until
/// the brackets rebalance.
fn split_measure_label(text: &str) -> (String, String) {
    let mut spans: Vec<DefinitionSpan> = Vec::new();
    let mut depth: i32 = 0;
    let mut open: Option<usize> = None;
    for (at, ch) in text.char_indices() {
        match ch {
            '(' => {
                if depth == 0 {
                    open = Some(at);
                }
                depth += 1;
            }
            ')' => {
                depth -= 1;
                if depth == 0
                    && let Some(start) = open.take()
                {
                    let content = text[start + 1..at].trim();
                    if !ILLUSTRATIVE.is_match(content) {
                        spans.push(DefinitionSpan {
                            start,
                            end: at + 1,
                            content: content.to_string(),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if spans.is_empty() {
        return (text.trim().to_string(), String::new());
    }

    let mut cleaned = String::with_capacity(text.len());
    let mut fragments = Vec::with_capacity(spans.len());
    let mut cursor = 0usize;
    for span in spans {
        cleaned.push_str(&text[cursor..span.start]);
        cursor = span.end;
        fragments.push(span.content);
    }
    cleaned.push_str(&text[cursor..]);
    (cleaned.trim().to_string(), fragments.join("; "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(value: &str) -> (String, String) {
        let table = Table::from_columns(vec![Column::from_texts("Measure name", [value])]);
        let table =
            parse_measure_annotations(table, "Measure name", "Definition").expect("parse");
        (
            table.columns[0].cells[0].as_text().unwrap().to_string(),
            table.columns[1].cells[0].as_text().unwrap().to_string(),
        )
    }

    #[test]
    fn extracts_a_single_definition() {
        let (label, definition) = parse_one("Response rate (base: all respondents)");
        assert_eq!(label, "Response rate");
        assert_eq!(definition, "base: all respondents");
    }

    #[test]
    fn preserves_multiple_definitions_in_order() {
        let (label, definition) =
            parse_one("Response rate (base: all respondents) (excludes non-responders)");
        assert_eq!(label, "Response rate");
        assert_eq!(definition, "base: all respondents; excludes non-responders");
    }

    #[test]
    fn nested_brackets_stay_one_definition_unit() {
        let (label, definition) = parse_one("Engagement index (mean of B01-B05 (weighted))");
        assert_eq!(label, "Engagement index");
        assert_eq!(definition, "mean of B01-B05 (weighted)");
    }

    #[test]
    fn illustrative_spans_are_not_definitions_and_stay_in_the_label() {
        let (label, definition) = parse_one("Score (e.g. 1-5)");
        assert_eq!(label, "Score (e.g. 1-5)");
        assert_eq!(definition, "");

        let (label, definition) = parse_one("Score (eg 1-5)");
        assert_eq!(label, "Score (eg 1-5)");
        assert_eq!(definition, "");

        let (label, definition) = parse_one("Score (For example: high)");
        assert_eq!(label, "Score (For example: high)");
        assert_eq!(definition, "");
    }

    #[test]
    fn marker_lookalikes_are_still_definitions() {
        // "egalitarian" starts with "eg" but not as a marker word.
        let (label, definition) = parse_one("Culture (egalitarian)");
        assert_eq!(label, "Culture");
        assert_eq!(definition, "egalitarian");
    }

    #[test]
    fn empty_fragments_are_kept() {
        let (label, definition) = parse_one("Index () (weighted)");
        assert_eq!(label, "Index");
        assert_eq!(definition, "; weighted");
    }

    #[test]
    fn unbalanced_closers_suppress_capture() {
        let (label, definition) = parse_one("Oddity) (trailing");
        assert_eq!(label, "Oddity) (trailing");
        assert_eq!(definition, "");
    }

    #[test]
    fn plain_labels_pass_through_trimmed() {
        let (label, definition) = parse_one("  Headcount ");
        assert_eq!(label, "Headcount");
        assert_eq!(definition, "");
    }
}
