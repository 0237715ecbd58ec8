//! Ingestion for People Survey demographic results: CSV sheet loading and
//! per-year batch configuration. The reshape core consumes the in-memory
//! tables produced here; spreadsheet-to-CSV export stays outside the system.

pub mod batch;
pub mod sheet;

pub use batch::{
    BatchConfig, DEFAULT_LOWERCASE_DEMOGRAPHIC, DataSheetSpec, Delimiters, SheetSpec, YearBatch,
    load_batch_config,
};
pub use sheet::{SheetOptions, read_sheet};
