//! Footnote-reference stripping from column headers.
//!
//! Results files suffix column headers with footnote markers in several
//! shapes: `[1]`, `[note 1]`, `[Note 1]`, and composite phrasings like
//! `[notes 8 and 9]` or `[1, 2]`. All of them are removed; bracketed text
//! that is neither a registered identifier nor a note phrase (for example
//! `[abc]`) is left alone.

use regex::Regex;

use csps_model::{FootnoteRegistry, Table};

use crate::sanitize::sanitize_column_names;

/// Remove footnote markers from every column name, then re-sanitize
/// residual whitespace.
pub fn strip_footnote_markers(table: Table, registry: &FootnoteRegistry) -> Table {
    let marker = Regex::new(&marker_pattern(registry.ids())).expect("footnote marker pattern");
    let mut table = table;
    for column in &mut table.columns {
        if marker.is_match(&column.name) {
            column.name = marker.replace_all(&column.name, "").into_owned();
        }
    }
    sanitize_column_names(table)
}

/// Build one case-insensitive alternation covering every marker shape.
///
/// Per-identifier alternatives come first (`[<id>]`, `[note <id>]`), followed
/// by the composite shapes, which are independent of the registry contents.
fn marker_pattern(ids: &[String]) -> String {
    let mut alternatives = Vec::with_capacity(ids.len() * 2 + 2);
    for id in ids {
        let escaped = regex::escape(id);
        alternatives.push(format!(r"\[{escaped}\]"));
        alternatives.push(format!(r"\[note\s*{escaped}\]"));
    }
    // Composite phrasings: "[notes 8 and 9]" and bare numeric lists "[1, 2]".
    alternatives.push(r"\[notes?\s+[\d\s,and]+\]".to_string());
    alternatives.push(r"\[[\d\s,]+\]".to_string());
    format!("(?i)(?:{})", alternatives.join("|"))
}
