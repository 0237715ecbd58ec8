#![deny(unsafe_code)]

use crate::error::{Result, SurveyError};

/// A single cell in a survey table.
///
/// Source spreadsheets mix text, codes and suppressed values; everything the
/// pipeline touches is carried as text, with suppressed or absent cells kept
/// distinct from empty strings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

/// A named column of row-aligned cells.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// Build a column from plain text values.
    pub fn from_texts<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            cells: values
                .into_iter()
                .map(|value| CellValue::Text(value.into()))
                .collect(),
        }
    }
}

/// An ordered sequence of named, row-aligned columns.
///
/// Invariant: all columns have the same number of cells. Reshape stages
/// produce a new logical table by removing a column and inserting its
/// replacements at the recorded position, so relative column order is
/// stable across the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_columns(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Number of rows (cells in the first column).
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, |column| column.cells.len())
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.height() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Column position, or the configuration error the pipeline surfaces
    /// when a caller names a column the input does not have.
    pub fn require_column_index(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| SurveyError::MissingColumn {
                name: name.to_string(),
            })
    }

    pub fn push_column(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn insert_column(&mut self, index: usize, column: Column) {
        self.columns.insert(index, column);
    }

    /// Remove a column by name, returning it with its former position.
    pub fn remove_column(&mut self, name: &str) -> Option<(usize, Column)> {
        let index = self.column_index(name)?;
        Some((index, self.columns.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::from_texts("A", ["1", "2"]),
            Column::from_texts("B", ["x", "y"]),
            Column::from_texts("C", ["p", "q"]),
        ])
    }

    #[test]
    fn height_and_width() {
        let table = sample();
        assert_eq!(table.height(), 2);
        assert_eq!(table.width(), 3);
        assert_eq!(Table::new().height(), 0);
    }

    #[test]
    fn remove_reports_former_position() {
        let mut table = sample();
        let (index, column) = table.remove_column("B").expect("column B");
        assert_eq!(index, 1);
        assert_eq!(column.name, "B");
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["A", "C"]
        );
    }

    #[test]
    fn insert_restores_order() {
        let mut table = sample();
        let (index, _) = table.remove_column("B").expect("column B");
        table.insert_column(index, Column::from_texts("B1", ["x", "y"]));
        table.insert_column(index + 1, Column::from_texts("B2", ["x", "y"]));
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec!["A", "B1", "B2", "C"]
        );
    }

    #[test]
    fn require_column_index_errors_on_absent() {
        let table = sample();
        let error = table.require_column_index("missing").unwrap_err();
        assert!(matches!(
            error,
            SurveyError::MissingColumn { ref name } if name == "missing"
        ));
    }

    #[test]
    fn cell_value_serializes_tagged() {
        let json = serde_json::to_string(&CellValue::text("42")).expect("serialize");
        assert!(json.contains("Text"));
        let round: CellValue = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(round.as_text(), Some("42"));
    }
}
