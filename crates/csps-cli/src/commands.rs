use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table as DisplayTable;
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use csps_ingest::{SheetOptions, YearBatch, load_batch_config, read_sheet};
use csps_model::{CellValue, Column, SurveyError, Table, check_column_widths, columns};
use csps_reshape::{CleanOptions, clean_results, reshape_results};

use crate::output::write_long_table;
use crate::summary::{apply_table_style, header_cell};
use crate::types::{BatchSummary, RunResult};

/// Options for the `process` command.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub config: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub keep_going: bool,
}

/// Process every configured yearly batch in order.
///
/// A batch failure aborts the run unless `keep_going` is set; batches are
/// independent, so an aborted run leaves earlier outputs intact.
pub fn run_process(options: &ProcessOptions) -> Result<RunResult> {
    let config = load_batch_config(&options.config)?;
    let output_dir = options.output_dir.clone().unwrap_or_else(|| {
        options
            .config
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default()
            .join("output")
    });
    let clean_options = CleanOptions {
        replacements: config.response_replacements.clone(),
        lowercase_demographic: config.lowercase_demographic.clone(),
    };

    let mut batches = Vec::new();
    let mut errors = Vec::new();
    for batch in &config.batches {
        let span = info_span!("batch", year = batch.year);
        let _guard = span.enter();
        match process_batch(batch, &clean_options, &output_dir, options.dry_run) {
            Ok(summary) => {
                info!(records = summary.output_records, "processed batch");
                batches.push(summary);
            }
            Err(failure) => {
                error!(error = %failure, "batch failed");
                errors.push(format!("{year}: {failure:#}", year = batch.year));
                batches.push(BatchSummary::failed(batch, format!("{failure:#}")));
                if !options.keep_going {
                    break;
                }
            }
        }
    }
    Ok(RunResult {
        output_dir,
        batches,
        errors,
    })
}

/// List the configured batches without processing anything.
pub fn run_batches(config_path: &Path) -> Result<()> {
    let config = load_batch_config(config_path)?;
    let mut table = DisplayTable::new();
    table.set_header(vec![
        header_cell("Year"),
        header_cell("Data sheet"),
        header_cell("Notes sheet"),
        header_cell("Delimiters"),
    ]);
    apply_table_style(&mut table);
    for batch in &config.batches {
        table.add_row(vec![
            batch.year.to_string(),
            batch.data.file.display().to_string(),
            batch.notes.file.display().to_string(),
            batch
                .data
                .delimiters
                .as_list()
                .iter()
                .map(|delimiter| format!("{delimiter:?}"))
                .collect::<Vec<_>>()
                .join(" "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn process_batch(
    batch: &YearBatch,
    clean_options: &CleanOptions,
    output_dir: &Path,
    dry_run: bool,
) -> Result<BatchSummary> {
    let notes = read_sheet(
        &batch.notes.file,
        &SheetOptions {
            skip_rows: batch.notes.skip_rows,
            na_values: Vec::new(),
        },
    )?;
    let data = read_sheet(
        &batch.data.file,
        &SheetOptions {
            skip_rows: batch.data.skip_rows,
            na_values: batch.data.na_values.clone(),
        },
    )?;
    let input_rows = data.height();
    let delimiters = batch.data.delimiters.as_list();

    let mut long = reshape_results(data, &notes, &delimiters)
        .with_context(|| format!("reshape {}", batch.data.file.display()))?;
    stamp_identity(&mut long, batch.year);
    let long = clean_results(long, clean_options);

    let issues = check_column_widths(&long);
    if let Some(issue) = issues.first() {
        for issue in &issues {
            warn!(
                column = %issue.column,
                limit = issue.limit,
                longest = issue.longest,
                sample = %issue.sample,
                "column width exceeded"
            );
        }
        return Err(SurveyError::ColumnWidth {
            column: issue.column.clone(),
            limit: issue.limit,
            longest: issue.longest,
        }
        .into());
    }

    let output_path = output_dir.join(format!("people-survey-demographics-{}.csv", batch.year));
    if dry_run {
        info!(path = %output_path.display(), "dry run, skipping output");
    } else {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("create output dir: {}", output_dir.display()))?;
        write_long_table(&long, &output_path)?;
    }
    Ok(BatchSummary {
        year: batch.year,
        source: batch.data.file.clone(),
        input_rows,
        output_records: long.height(),
        output_path: (!dry_run).then_some(output_path),
        error: None,
    })
}

/// Prepend the `_id` and `_year` identity columns.
fn stamp_identity(table: &mut Table, year: i32) {
    let height = table.height();
    let ids = (0..height)
        .map(|_| CellValue::text(Uuid::new_v4().to_string()))
        .collect();
    table.insert_column(0, Column::new(columns::RECORD_ID, ids));
    let years = vec![CellValue::text(year.to_string()); height];
    table.insert_column(1, Column::new(columns::RECORD_YEAR, years));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stamping_prepends_unique_ids_and_the_year() {
        let mut table = Table::from_columns(vec![Column::from_texts(
            columns::RESPONSE,
            ["Female", "Male"],
        )]);
        stamp_identity(&mut table, 2021);
        assert_eq!(
            table.column_names().collect::<Vec<_>>(),
            vec![columns::RECORD_ID, columns::RECORD_YEAR, columns::RESPONSE]
        );
        let ids = &table.columns[0].cells;
        assert_ne!(ids[0], ids[1]);
        assert_eq!(table.columns[1].cells[0], CellValue::text("2021"));
    }
}
