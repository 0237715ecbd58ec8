//! Response value cleaning on the long-format table.
//!
//! Three passes over the `Response` column: literal replacements (grade
//! labels changed between publication years), stripping the `" (England)"`
//! suffix some geographies carry, and a selective casing fix for one
//! demographic question whose responses are published in shouting caps.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use csps_model::{CellValue, Table, columns};

static ENGLAND_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(England\)$").expect("England suffix pattern"));

/// Cleaning configuration.
#[derive(Debug, Clone, Default)]
pub struct CleanOptions {
    /// Exact-match, case-sensitive response replacements.
    pub replacements: BTreeMap<String, String>,
    /// Demographic variable name whose responses get the casing transform.
    pub lowercase_demographic: Option<String>,
}

/// Apply the cleaning passes to every `Response` value.
///
/// Rows match the casing transform when their demographic variable name
/// equals the configured one exactly; the first word keeps its casing and
/// the rest are lowercased, re-joined with single spaces. Tables without a
/// `Response` column (or without the demographic name column, for the
/// casing pass) pass through unchanged; this stage never fails.
pub fn clean_responses(table: Table, options: &CleanOptions) -> Table {
    let mut table = table;
    let Some(response_index) = table.column_index(columns::RESPONSE) else {
        tracing::debug!("no response column present, skipping cleaning");
        return table;
    };
    let casing_mask = options.lowercase_demographic.as_deref().map(|target| {
        match table.column(columns::DEMOGRAPHIC_VARIABLE_NAME) {
            Some(column) => column
                .cells
                .iter()
                .map(|cell| cell.as_text() == Some(target))
                .collect(),
            None => {
                tracing::debug!("no demographic name column present, skipping casing transform");
                vec![false; table.height()]
            }
        }
    });

    let cells = &mut table.columns[response_index].cells;
    for (row, cell) in cells.iter_mut().enumerate() {
        let CellValue::Text(value) = cell else {
            continue;
        };
        let mut cleaned = match options.replacements.get(value.as_str()) {
            Some(replacement) => replacement.clone(),
            None => std::mem::take(value),
        };
        cleaned = ENGLAND_SUFFIX.replace(&cleaned, "").into_owned();
        if casing_mask
            .as_ref()
            .is_some_and(|mask| mask.get(row).copied().unwrap_or(false))
        {
            cleaned = lowercase_after_first_word(&cleaned);
        }
        *cell = CellValue::Text(cleaned);
    }
    table
}

/// First word unchanged, remaining words lowercased, single-space joined.
/// Values with no words are left as they are.
fn lowercase_after_first_word(value: &str) -> String {
    let mut words = value.split_whitespace();
    let Some(first) = words.next() else {
        return value.to_string();
    };
    let mut result = first.to_string();
    for word in words {
        result.push(' ');
        result.push_str(&word.to_lowercase());
    }
    result
}
