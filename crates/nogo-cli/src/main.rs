//! No-go ingredient checker CLI.

use clap::{ColorChoice, Parser};
use nogo_cli::logging::{LogConfig, LogFormat, init_logging};
use nogo_cli::outcome::{EXIT_FAILURE, EXIT_SAFE, exit_code};
use nogo_cli::service::ReferenceSettings;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_categorize, run_check, run_debug, run_list, run_tokens};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(EXIT_FAILURE);
    }
    let reference = ReferenceSettings {
        path: cli.nogo_list.clone(),
        has_headers: cli.has_header,
    };
    let outcome = match &cli.command {
        Command::Check(args) => run_check(args, &reference).map(|result| exit_code(result.verdict)),
        Command::Debug(args) => run_debug(args, &reference).map(|()| EXIT_SAFE),
        Command::Tokens(args) => run_tokens(args).map(|()| EXIT_SAFE),
        Command::List(args) => run_list(args, &reference).map(|()| EXIT_SAFE),
        Command::Categorize(args) => run_categorize(args).map(|()| EXIT_SAFE),
    };
    let code = match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// `--log-level` beats `-v`/`-q`, and either one disables `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = cli.log_level.map_or_else(
        || cli.verbosity.tracing_level_filter(),
        |level| match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        },
    );
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
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
