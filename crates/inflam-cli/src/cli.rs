//! CLI argument definitions for inflammation analysis.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "inflam",
    version,
    about = "Inflammation analysis - daily statistics for patient inflammation data",
    long_about = "Compute daily statistics over patient inflammation datasets.\n\n\
                  Reads headerless CSV or JSON patient records, reports the\n\
                  standard deviation of daily means across datasets, and\n\
                  normalises patients against their own peak."
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

    /// Prefix log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Standard deviation by day of the daily means of every dataset in a directory.
    Analyse(AnalyseArgs),

    /// Daily mean, max, min and standard deviation of one data file.
    Summary(SummaryArgs),

    /// Normalise each patient in one data file against their own peak.
    Normalise(NormaliseArgs),
}

#[derive(Parser)]
pub struct AnalyseArgs {
    /// Directory containing inflammation*.csv or inflammation*.json files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Which files to read from the directory.
    #[arg(long = "source", value_enum, default_value = "csv")]
    pub source: SourceArg,

    /// How to print the result.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// CSV or JSON data file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How to print the result.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct NormaliseArgs {
    /// CSV or JSON data file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Write the normalised CSV here instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

/// Data file family to load.
#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Csv,
    Json,
}

/// Result rendering.
#[derive(Clone, Copy, ValueEnum)]
pub enum OutputArg {
    Table,
    Json,
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
