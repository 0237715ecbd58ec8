//! People Survey demographics reshaper CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};

use csps_cli::commands::{ProcessOptions, run_batches, run_process};
use csps_cli::logging::{LogConfig, LogFormat, init_logging};
use csps_cli::summary::print_summary;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Process(args) => {
            let options = ProcessOptions {
                config: args.config,
                output_dir: args.output_dir,
                dry_run: args.dry_run,
                keep_going: args.keep_going,
            };
            match run_process(&options) {
                Ok(result) => {
                    print_summary(&result);
                    if result.has_errors() { 1 } else { 0 }
                }
                Err(error) => {
                    eprintln!("error: {error:#}");
                    1
                }
            }
        }
        Command::Batches(args) => match run_batches(&args.config) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !cli.verbosity.is_present();
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
