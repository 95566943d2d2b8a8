use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the scan command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Column-aligned text tables
    #[default]
    Table,
    /// Pretty-printed JSON, also exported to --output
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "fsmloc")]
#[command(
    author,
    version,
    about = "FSM-based code metrics: total/code/comment/blank line counts",
    long_about = "fsmloc classifies every line of recognized source files into \
    total/code/comment/blank using one lexical state machine per language, and \
    reports per-file, per-language and project-wide aggregates."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a directory or a single source file
    Scan(ScanArgs),

    /// List supported languages and their file extensions
    Language,

    /// Print the version banner
    Version,
}

#[derive(Parser, Debug)]
pub struct ScanArgs {
    /// Directory or file to scan
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// JSON export path used with --format json
    #[arg(long, default_value = "output.json")]
    pub output: PathBuf,

    /// Number of parallel workers; defaults to the CPU count
    #[arg(long)]
    pub workers: Option<usize>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
