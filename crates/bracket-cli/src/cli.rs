//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bracket",
    version,
    about = "Swipe-elimination food tournament",
    long_about = "Run a swipe-style elimination game over a food catalog.\n\n\
                  Each turn presents one food; accept or reject it, or undo\n\
                  the previous decision. The accepted foods are printed when\n\
                  every item has been decided."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Play one elimination game over a catalog.
    Play(PlayArgs),

    /// List the cuisines in a catalog with their item counts.
    Cuisines(CuisinesArgs),
}

#[derive(Parser)]
pub struct PlayArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Restrict the game to one cuisine.
    #[arg(long = "cuisine", value_name = "NAME")]
    pub cuisine: Option<String>,

    /// Shuffle the presentation order before the game starts.
    #[arg(long = "shuffle")]
    pub shuffle: bool,

    /// Seed for --shuffle, for a reproducible order.
    #[arg(long = "seed", value_name = "N", requires = "shuffle")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct CuisinesArgs {
    /// Path to the catalog JSON file.
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
