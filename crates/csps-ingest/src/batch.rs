//! Per-year batch configuration.
//!
//! Each publication year ships with its own sheet names, preamble depths and
//! delimiter conventions, so those live in a JSON config rather than code.
//! Relative sheet paths are resolved against the config file's directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Demographic question whose responses are published in capitals.
pub const DEFAULT_LOWERCASE_DEMOGRAPHIC: &str =
    "Which of the following categories best reflects the type of work you do in your main job?";

/// Whole-run configuration: one entry per yearly results file, plus
/// cleaning settings shared across years.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct BatchConfig {
    pub batches: Vec<YearBatch>,
    /// Exact-match response replacements (grade labels changed over time).
    #[serde(default = "default_response_replacements")]
    pub response_replacements: BTreeMap<String, String>,
    /// Demographic variable name given the casing transform.
    #[serde(default = "default_lowercase_demographic")]
    pub lowercase_demographic: Option<String>,
}

/// One yearly results file: its notes sheet and data sheet exports.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct YearBatch {
    pub year: i32,
    pub notes: SheetSpec,
    pub data: DataSheetSpec,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SheetSpec {
    pub file: PathBuf,
    #[serde(default)]
    pub skip_rows: usize,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DataSheetSpec {
    pub file: PathBuf,
    #[serde(default)]
    pub skip_rows: usize,
    /// Code/label delimiter(s) for this year's composite columns.
    pub delimiters: Delimiters,
    #[serde(default = "default_na_values")]
    pub na_values: Vec<String>,
}

/// A single delimiter or an ordered set of alternatives.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Delimiters {
    One(String),
    Many(Vec<String>),
}

impl Delimiters {
    pub fn as_list(&self) -> Vec<String> {
        match self {
            Delimiters::One(delimiter) => vec![delimiter.clone()],
            Delimiters::Many(delimiters) => delimiters.clone(),
        }
    }
}

fn default_na_values() -> Vec<String> {
    vec!["[c]".to_string()]
}

fn default_lowercase_demographic() -> Option<String> {
    Some(DEFAULT_LOWERCASE_DEMOGRAPHIC.to_string())
}

fn default_response_replacements() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("AO/AA".to_string(), "AA/AO".to_string()),
        ("SEO/HEO".to_string(), "HEO/SEO".to_string()),
        ("G6/7".to_string(), "G7/6".to_string()),
    ])
}

/// Load a batch config, resolving relative sheet paths against the config
/// file's directory.
pub fn load_batch_config(path: &Path) -> Result<BatchConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read batch config: {}", path.display()))?;
    let mut config: BatchConfig = serde_json::from_str(&raw)
        .with_context(|| format!("parse batch config: {}", path.display()))?;
    if let Some(base) = path.parent() {
        for batch in &mut config.batches {
            batch.notes.file = resolve(base, &batch.notes.file);
            batch.data.file = resolve(base, &batch.data.file);
        }
    }
    Ok(config)
}

fn resolve(base: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        base.join(file)
    }
}
