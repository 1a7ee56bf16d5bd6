//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Rangecheck - Test values against canonical range literals.
#[derive(Debug, Parser)]
#[command(name = "rangecheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RANGECHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare results)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a value lies in a range
    Check(CheckArgs),

    /// Parse a range and print its canonical form
    Render(RenderArgs),

    /// Check many requests from a JSON array
    Batch(BatchArgs),

    /// List supported value types
    Types,

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the check command.
#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Range literal (e.g., "[5, 7)" or "[Infinitive, 100)")
    #[arg(allow_hyphen_values = true)]
    pub range: String,

    /// Value to test
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Value type (e.g., Integer, BigDecimal, LocalDate.class)
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

/// Arguments for the render command.
#[derive(Debug, Parser)]
pub struct RenderArgs {
    /// Range literal
    #[arg(allow_hyphen_values = true)]
    pub range: String,

    /// Value type of the bounds
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

/// Arguments for the batch command.
#[derive(Debug, Parser)]
pub struct BatchArgs {
    /// JSON file containing requests
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Read the JSON array of requests from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Value type for requests without a typeName
    #[arg(short = 't', long = "type")]
    pub type_name: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
