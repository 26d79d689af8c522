//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// lintbridge - Normalizes static-analysis diagnostics into review suggestions
#[derive(Parser)]
#[command(name = "lintbridge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source file to analyze
    pub file: PathBuf,

    /// Engine executable to invoke (defaults to pylint)
    #[arg(long, value_name = "PROGRAM")]
    pub engine: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Supported output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single-line JSON array of suggestions
    Json,
    /// Human-readable listing
    Text,
}
