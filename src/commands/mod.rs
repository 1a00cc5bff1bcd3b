//! CLI subcommands

pub mod check;
pub mod list;
pub mod new;
pub mod show;

use clap::ValueEnum;

/// Output format for the read-side commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    Plain,
    /// Machine-readable JSON for the external generator
    Json,
}
