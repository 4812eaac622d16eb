//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for rating yoga instructors.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "yogarate")]
#[command(about = "Rate yoga instructors and browse how their classes compare")]
#[command(version)]
pub struct Cli {
    /// Override the data directory for this invocation (default: $YOGARATE_DATA_DIR)
    #[arg(long = "data-dir", global = true)]
    pub data_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
