//! CLI argument parsing for campath
//!
//! Global flags: --campus, --config, --paths-file, --format, --quiet,
//! --verbose, --log-level, --log-json

pub mod commands;
pub mod config;
pub mod format;
pub mod output;
pub mod parse;
pub mod paths;

use clap::Parser;
use std::path::PathBuf;

pub use commands::Commands;
pub use config::ConfigCommands;
pub use output::OutputFormat;
pub use paths::PathCommands;

/// Campath - campus navigation from the command line
#[derive(Parser, Debug)]
#[command(name = "campath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Campus tables file (TOML or JSON); defaults to the bundled campus
    #[arg(long, global = true, env = "CAMPATH_CAMPUS")]
    pub campus: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Custom path store file
    #[arg(long, global = true)]
    pub paths_file: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `campath_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
