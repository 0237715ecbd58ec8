//! Column names shared across the reshape pipeline and its outputs.
//!
//! The source spreadsheets publish one wide `Demographic variable` column and
//! one column per measure; the pipeline replaces them with the coded columns
//! below. Names match the relational schema the output feeds.

/// Wide-format composite column: `<code><delimiter><variable name>`.
pub const DEMOGRAPHIC_VARIABLE: &str = "Demographic variable";

pub const DEMOGRAPHIC_VARIABLE_CODE: &str = "Demographic variable code";
pub const DEMOGRAPHIC_VARIABLE_NAME: &str = "Demographic variable name";
pub const DERIVED_FROM: &str = "Derived from";
pub const RESPONSE: &str = "Response";
pub const NOTES: &str = "Notes";

/// Long-format composite column produced by unpivoting, later split into
/// [`MEASURE_CODE`] and [`MEASURE_NAME`].
pub const MEASURE: &str = "Measure";
pub const VALUE: &str = "Value";
pub const MEASURE_CODE: &str = "Measure code";
pub const MEASURE_NAME: &str = "Measure name";
pub const DEFINITION: &str = "Definition";

/// Registry column on the notes sheet listing footnote identifiers.
pub const NOTE_NUMBER: &str = "Note number";

/// Caller-added identity columns stamped onto the long table.
pub const RECORD_ID: &str = "_id";
pub const RECORD_YEAR: &str = "_year";

/// Identifier columns preserved through unpivoting, in output order.
/// Only the ones present in the wide table are carried.
pub const IDENTIFIER_COLUMNS: &[&str] = &[
    DEMOGRAPHIC_VARIABLE_CODE,
    DEMOGRAPHIC_VARIABLE_NAME,
    DERIVED_FROM,
    RESPONSE,
    NOTES,
];
