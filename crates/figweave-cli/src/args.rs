//! Command-line argument definitions for the figweave CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select where the Figma document comes from,
//! where the generated files go, and how verbose logging is.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for the figweave converter
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Key of the Figma file to fetch, overrides FIGMA_FILE_KEY
    #[arg(long)]
    pub file_key: Option<String>,

    /// Render a saved API response instead of fetching
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output directory, overrides the configured one
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to a .env file with Figma credentials
    #[arg(long)]
    pub env_file: Option<PathBuf>,

    /// Also write the fetched JSON to this path
    #[arg(long, conflicts_with = "input")]
    pub save_json: Option<PathBuf>,

    /// Limit how deep into the document tree the API descends
    #[arg(long)]
    pub depth: Option<u32>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
