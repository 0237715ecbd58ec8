//! Footnote registry sourced from the notes sheet.

use crate::error::{Result, SurveyError};
use crate::table::Table;

/// The set of footnote identifiers published on a results file's notes sheet.
///
/// Used only as a lookup set when stripping `[1]` / `[note 1]` markers from
/// column headers; never mutated by the pipeline. Identifiers keep their
/// first-seen order, duplicates and missing entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FootnoteRegistry {
    ids: Vec<String>,
}

impl FootnoteRegistry {
    /// Extract the registry from a notes table.
    ///
    /// Fails with [`SurveyError::MissingColumn`] when the configured registry
    /// column is absent from the notes sheet.
    pub fn from_table(notes: &Table, column: &str) -> Result<Self> {
        let index = notes
            .column_index(column)
            .ok_or_else(|| SurveyError::MissingColumn {
                name: column.to_string(),
            })?;
        let mut ids = Vec::new();
        for cell in &notes.columns[index].cells {
            let Some(text) = cell.as_text() else {
                continue;
            };
            let id = text.trim();
            if id.is_empty() || ids.iter().any(|seen| seen == id) {
                continue;
            }
            ids.push(id.to_string());
        }
        Ok(Self { ids })
    }

    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{CellValue, Column};

    #[test]
    fn extracts_ids_in_order_skipping_gaps() {
        let notes = Table::from_columns(vec![Column::new(
            "Note number",
            vec![
                CellValue::text("1"),
                CellValue::Missing,
                CellValue::text("2"),
                CellValue::text(" 1 "),
                CellValue::text(""),
            ],
        )]);
        let registry = FootnoteRegistry::from_table(&notes, "Note number").expect("registry");
        assert_eq!(registry.ids(), &["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn missing_registry_column_is_a_configuration_error() {
        let notes = Table::from_columns(vec![Column::from_texts("Note text", ["whatever"])]);
        let error = FootnoteRegistry::from_table(&notes, "Note number").unwrap_err();
        assert!(matches!(error, SurveyError::MissingColumn { ref name } if name == "Note number"));
    }
}
