//! Reshape and normalization pipeline for People Survey demographic results.
//!
//! Takes the wide-format annotated spreadsheet extract (footnoted headers,
//! composite coded column names, parenthetical annotations) and produces the
//! normalized long-format record set:
//!
//! - **sanitize**: column-name whitespace stripping
//! - **footnotes**: footnote-marker removal against the notes registry
//! - **split**: code/label splitting on per-batch delimiters
//! - **variable**: derived-from provenance extraction
//! - **unpivot**: wide measure columns to (Measure, Value) rows
//! - **measure**: definition extraction with bracket-depth scanning
//! - **clean**: response replacements, suffix stripping, selective casing

pub mod clean;
pub mod footnotes;
pub mod measure;
pub mod pipeline;
pub mod sanitize;
pub mod split;
pub mod unpivot;
pub mod variable;

pub use clean::{CleanOptions, clean_responses};
pub use footnotes::strip_footnote_markers;
pub use measure::parse_measure_annotations;
pub use pipeline::{clean_results, reshape_results};
pub use sanitize::sanitize_column_names;
pub use split::split_column_on_delimiter;
pub use unpivot::unpivot;
pub use variable::parse_variable_annotations;
