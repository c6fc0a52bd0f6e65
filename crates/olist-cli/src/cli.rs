//! CLI argument definitions for Olist EDA.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "olist-eda",
    version,
    about = "Exploratory analysis of the Olist e-commerce dataset",
    long_about = "Exploratory analysis of the Brazilian e-commerce (Olist) public dataset.\n\n\
                  Loads the dataset files, derives calendar features from timestamps,\n\
                  finds IQR outliers and prints value counts."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
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
    /// Load every dataset file and print its shape.
    Load(LoadArgs),

    /// Derive time features from a timestamp column.
    Features(FeaturesArgs),

    /// Compute IQR bounds and split a numeric column into inliers and outliers.
    Outliers(OutliersArgs),

    /// Print value counts of a categorical column.
    Counts(CountsArgs),
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Folder holding the eight olist_*_dataset.csv files.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// Input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Timestamp column to expand.
    #[arg(long = "column", short = 'c')]
    pub column: String,

    /// Prefix for the derived columns (e.g. "order_purchase").
    #[arg(long = "prefix", short = 'p')]
    pub prefix: String,

    /// Write the expanded table to this CSV instead of printing a preview.
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: Option<PathBuf>,

    /// Rows shown in the preview.
    #[arg(long = "rows", default_value_t = 5)]
    pub rows: usize,
}

#[derive(Parser)]
pub struct OutliersArgs {
    /// Input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Numeric column to analyse.
    #[arg(long = "feature", short = 'f')]
    pub feature: String,

    /// IQR multiplier for the fences.
    #[arg(long = "k-factor", default_value_t = olist_stats::DEFAULT_K_FACTOR)]
    pub k_factor: f64,

    /// Outlier rule.
    ///
    /// `conjunction` reproduces the historical notebook output, which never
    /// flags any row; `disjunction` flags values beyond either fence.
    #[arg(long = "rule", value_enum, default_value = "conjunction")]
    pub rule: OutlierRuleArg,
}

#[derive(Parser)]
pub struct CountsArgs {
    /// Input CSV file.
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// Categorical column to count.
    #[arg(long = "column", short = 'c')]
    pub column: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutlierRuleArg {
    Conjunction,
    Disjunction,
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
