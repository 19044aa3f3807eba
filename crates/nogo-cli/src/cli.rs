//! CLI argument definitions for the no-go checker.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "nogo",
    version,
    about = "Check food-label ingredient text against a no-go ingredient list",
    long_about = "Check food-label ingredient text against a no-go ingredient list.\n\n\
                  The list is a two-column CSV (ingredient, category). Its location is\n\
                  taken from --nogo-list, then NOGO_LIST_PATH, then data/nogo_ingredients.csv."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// No-go ingredient list (CSV: ingredient, category).
    #[arg(long = "nogo-list", value_name = "PATH", global = true)]
    pub nogo_list: Option<PathBuf>,

    /// Treat the first row of the no-go list as a header.
    #[arg(long = "has-header", global = true)]
    pub has_header: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
    /// Classify ingredient text.
    Check(CheckArgs),

    /// Show tokens, normalized tokens, and exact matches.
    Debug(InputArgs),

    /// Print the token sequence extracted from ingredient text.
    Tokens(InputArgs),

    /// List the loaded no-go ingredients.
    List(ListArgs),

    /// Build a categorized no-go list from a one-ingredient-per-line file.
    Categorize(CategorizeArgs),
}

/// Where the label text comes from. Falls back to stdin.
#[derive(Args)]
pub struct InputArgs {
    /// Ingredient text to check.
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read ingredient text from a file.
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Print the result as JSON.
    #[arg(long = "json")]
    pub json: bool,

    /// Request fuzzy matching (accepted for compatibility; matching stays exact).
    #[arg(long = "fuzzy")]
    pub fuzzy: bool,

    /// Similarity threshold (0-100) for fuzzy matching.
    #[arg(long = "fuzzy-threshold", value_name = "N", default_value_t = 90)]
    pub fuzzy_threshold: u8,

    /// Continue with an unavailable checker if the no-go list cannot be loaded.
    ///
    /// The result then has flag "Error" instead of a verdict.
    #[arg(long = "allow-unavailable")]
    pub allow_unavailable: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Only show entries in this category (case-insensitive).
    #[arg(long = "category", value_name = "NAME")]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct CategorizeArgs {
    /// Raw list, one ingredient per line.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV (a `_debug` variant is written alongside).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Print the summary as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
