pub mod columns;
pub mod conformance;
pub mod error;
pub mod registry;
pub mod table;

pub use conformance::{WIDTH_LIMITS, WidthIssue, check_column_widths};
pub use error::{Result, SurveyError};
pub use registry::FootnoteRegistry;
pub use table::{CellValue, Column, Table};
