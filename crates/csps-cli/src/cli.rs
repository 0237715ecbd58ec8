//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "csps",
    version,
    about = "Reshape Civil Service People Survey demographic results into long-format records",
    long_about = "Reshape Civil Service People Survey demographic results files.\n\n\
                  Strips footnote markers from headers, splits coded columns, extracts\n\
                  derived-from provenance and measure definitions, unpivots measures into\n\
                  long-format records and cleans response values."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process every yearly batch in a config file.
    Process(ProcessArgs),

    /// List the batches a config file defines.
    Batches(BatchesArgs),
}

#[derive(Parser)]
pub struct ProcessArgs {
    /// Path to the batch config JSON.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Output directory for long-format CSVs (default: <config dir>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Reshape and validate without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Continue with the next batch when one fails.
    #[arg(long = "keep-going")]
    pub keep_going: bool,
}

#[derive(Parser)]
pub struct BatchesArgs {
    /// Path to the batch config JSON.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
