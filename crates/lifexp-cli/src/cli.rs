//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use lifexp_model::SourceFormat;

#[derive(Parser)]
#[command(
    name = "lifexp",
    version,
    about = "Clean Eurostat life-expectancy data for one region",
    long_about = "Reshape the Eurostat life-expectancy export into a long table \
                  (unit, sex, age, region, year, value) and write the rows of one \
                  region to <code>_life_expectancy.csv.",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub clean: CleanArgs,

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
    /// List known region codes.
    Regions(RegionsArgs),
}

#[derive(Args)]
pub struct CleanArgs {
    /// Region code to filter and write.
    #[arg(short = 'c', long = "country", value_name = "CODE", default_value = "PT")]
    pub country: String,

    #[command(flatten)]
    pub input: InputArgs,

    /// Directory for the region file (default: the data directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct InputArgs {
    /// Shape of the raw dataset.
    #[arg(long = "source", value_enum, default_value = "tsv")]
    pub source: SourceArg,

    /// Directory holding the raw dataset.
    #[arg(long = "data-dir", value_name = "DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Raw dataset path (default: the conventional file in the data directory).
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,
}

#[derive(Args)]
pub struct RegionsArgs {
    /// Omit union and regional aggregate codes.
    #[arg(long = "countries-only", conflicts_with = "from_data")]
    pub countries_only: bool,

    /// List the region codes present in the cleaned dataset instead.
    #[arg(long = "from-data")]
    pub from_data: bool,

    #[command(flatten)]
    pub input: InputArgs,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SourceArg {
    Tsv,
    Json,
}

impl From<SourceArg> for SourceFormat {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Tsv => SourceFormat::Tsv,
            SourceArg::Json => SourceFormat::Json,
        }
    }
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
