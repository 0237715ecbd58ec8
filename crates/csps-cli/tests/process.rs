//! End-to-end `process` run over temporary sheet exports.

use std::collections::BTreeSet;
use std::fs;

use csps_cli::commands::{ProcessOptions, run_process};

const NOTES_SHEET: &str = "\
Notes,
Note number,Note text
1,Response categories were revised this year
";

const DATA_SHEET: &str = "\
Civil Service People Survey,,,
Demographic variable,Response [1],E01. Engagement index,E02. Score (e.g. 1-5)
B1. Grade,SEO/HEO,45,3
B1. Grade,AB (England),[c],4
";

const CONFIG: &str = r#"{
    "batches": [{
        "year": 2021,
        "notes": {"file": "notes.csv", "skip_rows": 1},
        "data": {"file": "data.csv", "skip_rows": 1, "delimiters": "."}
    }]
}"#;

#[test]
fn processes_a_batch_into_a_long_format_csv() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("notes.csv"), NOTES_SHEET).expect("write notes");
    fs::write(dir.path().join("data.csv"), DATA_SHEET).expect("write data");
    let config_path = dir.path().join("batches.json");
    fs::write(&config_path, CONFIG).expect("write config");

    let options = ProcessOptions {
        config: config_path,
        output_dir: None,
        dry_run: false,
        keep_going: false,
    };
    let result = run_process(&options).expect("run");
    assert!(!result.has_errors(), "errors: {:?}", result.errors);
    assert_eq!(result.batches.len(), 1);
    assert_eq!(result.batches[0].input_rows, 2);
    assert_eq!(result.batches[0].output_records, 4);

    let output_path = result.batches[0].output_path.as_ref().expect("output path");
    let mut reader = csv::Reader::from_path(output_path).expect("read output");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        headers,
        vec![
            "_id",
            "_year",
            "Demographic variable code",
            "Demographic variable name",
            "Derived from",
            "Response",
            "Measure code",
            "Measure name",
            "Definition",
            "Value",
        ]
    );

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|record| {
            record
                .expect("record")
                .iter()
                .map(ToString::to_string)
                .collect()
        })
        .collect();
    assert_eq!(rows.len(), 4);

    let ids: BTreeSet<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(ids.len(), 4, "_id values must be unique");
    assert!(rows.iter().all(|row| row[1] == "2021"));

    // Grade replacement and England-suffix stripping applied.
    assert_eq!(rows[0][5], "HEO/SEO");
    assert_eq!(rows[2][5], "AB");

    // Measures melt row-major: E01 then E02 per input row.
    assert_eq!(rows[0][6], "E01");
    assert_eq!(rows[1][6], "E02");
    // The suppressed value ([c]) comes out as an empty field.
    assert_eq!(rows[0][9], "45");
    assert_eq!(rows[2][9], "");
    // Illustrative parenthetical stays in the measure name, no definition.
    assert_eq!(rows[1][7], "Score (e.g. 1-5)");
    assert_eq!(rows[1][8], "");
}

#[test]
fn dry_run_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("notes.csv"), NOTES_SHEET).expect("write notes");
    fs::write(dir.path().join("data.csv"), DATA_SHEET).expect("write data");
    let config_path = dir.path().join("batches.json");
    fs::write(&config_path, CONFIG).expect("write config");

    let options = ProcessOptions {
        config: config_path,
        output_dir: None,
        dry_run: true,
        keep_going: false,
    };
    let result = run_process(&options).expect("run");
    assert!(!result.has_errors());
    assert!(result.batches[0].output_path.is_none());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn a_missing_registry_column_fails_the_batch() {
    let dir = tempfile::tempdir().expect("tempdir");
    // Notes sheet without the "Note number" column.
    fs::write(dir.path().join("notes.csv"), "Notes,\nNote text,Detail\nx,y\n")
        .expect("write notes");
    fs::write(dir.path().join("data.csv"), DATA_SHEET).expect("write data");
    let config_path = dir.path().join("batches.json");
    fs::write(&config_path, CONFIG).expect("write config");

    let options = ProcessOptions {
        config: config_path,
        output_dir: None,
        dry_run: false,
        keep_going: false,
    };
    let result = run_process(&options).expect("run");
    assert!(result.has_errors());
    assert!(result.errors[0].contains("Note number"));
}
