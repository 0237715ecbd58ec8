//! Column-name whitespace sanitizer.

use csps_model::Table;

/// Trim leading and trailing whitespace from every column name.
///
/// No other character normalization is applied; cell values are untouched.
/// Idempotent: a second pass is a no-op.
pub fn sanitize_column_names(mut table: Table) -> Table {
    for column in &mut table.columns {
        let trimmed = column.name.trim();
        if trimmed.len() != column.name.len() {
            column.name = trimmed.to_string();
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use csps_model::Column;

    #[test]
    fn trims_surrounding_whitespace_only() {
        let table = Table::from_columns(vec![
            Column::from_texts("  Response \t", ["Female"]),
            Column::from_texts("Head  count", ["10"]),
        ]);
        let table = sanitize_column_names(table);
        let names: Vec<_> = table.column_names().collect();
        // Interior whitespace is preserved.
        assert_eq!(names, vec!["Response", "Head  count"]);
    }

    #[test]
    fn idempotent() {
        let table = Table::from_columns(vec![Column::from_texts(" Measure ", ["1"])]);
        let once = sanitize_column_names(table);
        let twice = sanitize_column_names(once.clone());
        assert_eq!(once, twice);
    }
}
