//! Command-line argument definitions for the roadmap CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the roadmap diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the learning-path JSON payload
    #[arg(help = "Path to the learning-path JSON payload")]
    pub input: String,

    /// Path to the resources JSON payload
    #[arg(short, long)]
    pub resources: Option<String>,

    /// Path to the output graph JSON file
    #[arg(short, long, default_value = "roadmap.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
