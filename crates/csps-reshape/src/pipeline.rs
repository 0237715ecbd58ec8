//! Stage sequencing for one results file.

use tracing::debug;

use csps_model::{FootnoteRegistry, Result, Table, columns};

use crate::clean::{CleanOptions, clean_responses};
use crate::footnotes::strip_footnote_markers;
use crate::measure::parse_measure_annotations;
use crate::sanitize::sanitize_column_names;
use crate::split::split_column_on_delimiter;
use crate::unpivot::unpivot;
use crate::variable::parse_variable_annotations;

/// Reshape one wide results table into the normalized long form.
///
/// Stages run in a fixed order: sanitize both sheets' column names, strip
/// footnote markers using the notes sheet's registry, split the composite
/// `Demographic variable` column, extract derived-from provenance, unpivot
/// the measure columns, split the composite `Measure` column, and extract
/// measure definitions. Each stage is a pure transform of its input; a
/// failure aborts this table only.
pub fn reshape_results(data: Table, notes: &Table, delimiters: &[String]) -> Result<Table> {
    let data = sanitize_column_names(data);
    let notes = sanitize_column_names(notes.clone());
    let registry = FootnoteRegistry::from_table(&notes, columns::NOTE_NUMBER)?;
    debug!(footnotes = registry.len(), "built footnote registry");

    let data = strip_footnote_markers(data, &registry);
    let data = split_column_on_delimiter(
        data,
        columns::DEMOGRAPHIC_VARIABLE,
        columns::DEMOGRAPHIC_VARIABLE_CODE,
        columns::DEMOGRAPHIC_VARIABLE_NAME,
        delimiters,
    )?;
    let data = parse_variable_annotations(
        data,
        columns::DEMOGRAPHIC_VARIABLE_NAME,
        columns::DERIVED_FROM,
    )?;
    debug!(rows = data.height(), columns = data.width(), "parsed demographic variables");

    let data = unpivot(&data);
    debug!(rows = data.height(), "unpivoted measure columns");

    let data = split_column_on_delimiter(
        data,
        columns::MEASURE,
        columns::MEASURE_CODE,
        columns::MEASURE_NAME,
        delimiters,
    )?;
    let data = parse_measure_annotations(data, columns::MEASURE_NAME, columns::DEFINITION)?;
    debug!(rows = data.height(), columns = data.width(), "parsed measure definitions");
    Ok(data)
}

/// Clean the reshaped long table's responses.
///
/// Separate from [`reshape_results`] so callers can stamp identity columns
/// between the two passes.
pub fn clean_results(table: Table, options: &CleanOptions) -> Table {
    clean_responses(table, options)
}
