//! Product id reconciliation CLI.

use clap::{ColorChoice, Parser};
use prodid_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, SummaryFormatArg};
use crate::commands::{run_analyze, run_sequence, run_sheets};
use crate::summary::{print_summary, print_summary_json};

/// Exit status when `--fail-on-findings` is set and the report has entries.
const FINDINGS_EXIT_CODE: i32 = 2;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Analyze(args) => match run_analyze(&args) {
            Ok(result) => {
                let printed = match args.summary {
                    SummaryFormatArg::Table => {
                        print_summary(&result);
                        Ok(())
                    }
                    SummaryFormatArg::Json => print_summary_json(&result),
                };
                match printed {
                    Err(error) => {
                        eprintln!("error: {error:#}");
                        1
                    }
                    Ok(()) if args.fail_on_findings && result.outcome.has_findings() => {
                        FINDINGS_EXIT_CODE
                    }
                    Ok(()) => 0,
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Sheets(args) => exit_code_of(run_sheets(&args)),
        Command::Sequence(args) => exit_code_of(run_sequence(&args)),
    };
    std::process::exit(exit_code);
}

fn exit_code_of(result: anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    let mut config = LogConfig::default()
        .with_level(level_filter)
        .with_format(format)
        .with_timestamps(cli.log_timestamps)
        .with_ansi(with_ansi)
        .with_target(level_filter >= LevelFilter::DEBUG)
        .with_spans(level_filter >= LevelFilter::INFO)
        .with_log_file(cli.log_file.clone());
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(args: &[&str]) -> LogConfig {
        let cli = Cli::try_parse_from(args).expect("parse cli");
        log_config_from_cli(&cli)
    }

    #[test]
    fn default_run_hides_targets_and_spans() {
        let config = config_for(&["prodid", "sequence", "A3"]);
        assert_eq!(config.level_filter, LevelFilter::WARN);
        assert!(config.use_env_filter);
        assert!(!config.with_target);
        assert!(!config.with_spans);
    }

    #[test]
    fn debug_level_shows_targets_and_spans() {
        let config = config_for(&[
            "prodid",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "sequence",
            "A3",
        ]);
        assert_eq!(config.level_filter, LevelFilter::DEBUG);
        assert!(!config.use_env_filter);
        assert!(config.with_target);
        assert!(config.with_spans);
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn single_verbose_flag_enables_spans_only() {
        let config = config_for(&["prodid", "-v", "sequence", "A3"]);
        assert_eq!(config.level_filter, LevelFilter::INFO);
        assert!(!config.with_target);
        assert!(config.with_spans);
    }
}
