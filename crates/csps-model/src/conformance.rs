//! Column-width conformance against the relational schema.
//!
//! The collated results land in fixed-width NVARCHAR columns; a value longer
//! than its column truncates silently at the database, so the pipeline checks
//! widths before any output is written.

use crate::columns;
use crate::table::Table;

/// Maximum character widths per output column, matching the target schema.
pub const WIDTH_LIMITS: &[(&str, usize)] = &[
    (columns::DEMOGRAPHIC_VARIABLE_CODE, 16),
    (columns::DEMOGRAPHIC_VARIABLE_NAME, 256),
    (columns::DERIVED_FROM, 16),
    (columns::RESPONSE, 128),
    (columns::MEASURE_CODE, 16),
    (columns::MEASURE_NAME, 256),
    (columns::DEFINITION, 256),
];

/// A column whose longest value exceeds its schema width.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct WidthIssue {
    pub column: String,
    pub limit: usize,
    pub longest: usize,
    /// One offending value, for the report.
    pub sample: String,
}

/// Check every limited column present in the table against its width limit.
///
/// Columns the table does not have are skipped; widths are measured in
/// characters, as the target schema counts them.
pub fn check_column_widths(table: &Table) -> Vec<WidthIssue> {
    let mut issues = Vec::new();
    for &(name, limit) in WIDTH_LIMITS {
        let Some(column) = table.column(name) else {
            continue;
        };
        let mut longest = 0usize;
        let mut sample = None;
        for cell in &column.cells {
            let Some(text) = cell.as_text() else {
                continue;
            };
            let width = text.chars().count();
            if width > longest {
                longest = width;
                if width > limit {
                    sample = Some(text.to_string());
                }
            }
        }
        if longest > limit {
            issues.push(WidthIssue {
                column: name.to_string(),
                limit,
                longest,
                sample: sample.unwrap_or_default(),
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    #[test]
    fn flags_values_over_the_limit() {
        let table = Table::from_columns(vec![Column::from_texts(
            columns::DEMOGRAPHIC_VARIABLE_CODE,
            ["A1", "THIS CODE IS FAR TOO LONG"],
        )]);
        let issues = check_column_widths(&table);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].column, columns::DEMOGRAPHIC_VARIABLE_CODE);
        assert_eq!(issues[0].limit, 16);
        assert_eq!(issues[0].longest, 25);
        assert_eq!(issues[0].sample, "THIS CODE IS FAR TOO LONG");
    }

    #[test]
    fn passes_within_limits_and_skips_absent_columns() {
        let table = Table::from_columns(vec![
            Column::from_texts(columns::RESPONSE, ["Female", "Male"]),
            Column::from_texts("Unchecked", [
                "an arbitrarily long value in a column no limit applies to xxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxxx",
            ]),
        ]);
        assert!(check_column_widths(&table).is_empty());
    }
}
