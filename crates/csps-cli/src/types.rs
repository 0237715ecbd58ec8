use std::path::PathBuf;

use csps_ingest::YearBatch;

/// Outcome of a whole `process` run.
#[derive(Debug)]
pub struct RunResult {
    pub output_dir: PathBuf,
    pub batches: Vec<BatchSummary>,
    pub errors: Vec<String>,
}

impl RunResult {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Outcome of one yearly batch.
#[derive(Debug)]
pub struct BatchSummary {
    pub year: i32,
    pub source: PathBuf,
    pub input_rows: usize,
    pub output_records: usize,
    pub output_path: Option<PathBuf>,
    pub error: Option<String>,
}

impl BatchSummary {
    pub fn failed(batch: &YearBatch, error: String) -> Self {
        Self {
            year: batch.year,
            source: batch.data.file.clone(),
            input_rows: 0,
            output_records: 0,
            output_path: None,
            error: Some(error),
        }
    }
}
