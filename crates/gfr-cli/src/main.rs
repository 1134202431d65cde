//! GFR slope assessment CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use gfr_cli::cli::{AssessArgs, Cli, Command, LogFormatArg, LogLevelArg};
use gfr_cli::commands::{AssessOutcome, run_assess};
use gfr_cli::config::{OutputFormat, Settings, load_settings};
use gfr_cli::logging::{LogConfig, LogFormat, init_logging};
use gfr_cli::render::{render_assessment, render_thresholds, render_validation_errors};

/// Exit code when input fails validation.
const EXIT_INVALID_INPUT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::FAILURE;
    }
    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };
    match &cli.command {
        Command::Assess(args) => assess(args, &settings),
        Command::Thresholds => {
            println!("{}", render_thresholds());
            ExitCode::SUCCESS
        }
    }
}

fn assess(args: &AssessArgs, settings: &Settings) -> ExitCode {
    let format = args
        .format
        .map_or(settings.output.format, OutputFormat::from);
    let outcome = match run_assess(args, settings) {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("error: {error:#}");
            return ExitCode::FAILURE;
        }
    };
    let (rendered, code) = match (&outcome, format) {
        (AssessOutcome::Assessed(assessment), OutputFormat::Table) => {
            (Ok(render_assessment(assessment)), ExitCode::SUCCESS)
        }
        (AssessOutcome::Assessed(assessment), OutputFormat::Json) => (
            serde_json::to_string_pretty(assessment),
            ExitCode::SUCCESS,
        ),
        (AssessOutcome::Rejected(errors), OutputFormat::Table) => (
            Ok(render_validation_errors(errors)),
            ExitCode::from(EXIT_INVALID_INPUT),
        ),
        (AssessOutcome::Rejected(errors), OutputFormat::Json) => (
            serde_json::to_string_pretty(&serde_json::json!({ "errors": errors })),
            ExitCode::from(EXIT_INVALID_INPUT),
        ),
    };
    match rendered {
        Ok(text) => {
            println!("{text}");
            code
        }
        Err(error) => {
            eprintln!("error: failed to serialize output: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
