use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gcprop CLI - estimate boiling point, melting point, critical temperature and critical pressure of a structure by group contribution.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for batch estimation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.precision=3
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", global = true)]
    pub set_values: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the properties of a single structure.
    Estimate(EstimateArgs),
    /// Estimate the properties of every structure in a CSV file.
    Batch(BatchArgs),
    /// List the recognized fragments and their contributions.
    Groups,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Table,
    Json,
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Structure in simplified linear notation (e.g., CH3CH2OH).
    #[arg(value_name = "STRUCTURE")]
    pub structure: String,

    /// Override the output format from the config file.
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Override the number of decimals shown in table output.
    #[arg(short, long, value_name = "INT")]
    pub precision: Option<u32>,
}

/// Arguments for the `batch` subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the input CSV file with a header row.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Override the name of the input column holding the structures.
    #[arg(long, value_name = "NAME")]
    pub column: Option<String>,

    /// Abort with an error if any structure fails, instead of recording the error in the output.
    #[arg(long)]
    pub fail_fast: bool,
}
