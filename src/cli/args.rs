//! CLI argument types

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::batch::PaddingSide;
use crate::config::{Encoding, OutputFormat};

/// seqbatch: pad nucleotide sequences into fixed-width model batches
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "seqbatch")]
#[command(version)]
#[command(about = "Pad, truncate and mask nucleotide sequences for sequence models")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Load sequences from the CSV named in a YAML config and pad them
    Pad(PadArgs),

    /// Pad sequences given on the command line
    Inline(InlineArgs),

    /// Validate a configuration file without reading input
    Validate(ValidateArgs),
}

/// Arguments for the pad command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PadArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override padding.max_length
    #[arg(long, allow_negative_numbers = true)]
    pub max_length: Option<i64>,

    /// Override input.column
    #[arg(long)]
    pub column: Option<String>,

    /// Override output.path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override output.format
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the inline command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InlineArgs {
    /// Raw sequences, e.g. AUGCUACG
    #[arg(value_name = "SEQUENCE", required = true)]
    pub sequences: Vec<String>,

    /// Target width
    #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
    pub max_length: i64,

    /// Token encoding
    #[arg(long, default_value_t = Encoding::Symbols)]
    pub encoding: Encoding,

    /// Pad sentinel for the symbols encoding
    #[arg(long)]
    pub pad_token: Option<String>,

    /// Padding side
    #[arg(long, default_value_t = PaddingSide::Right)]
    pub side: PaddingSide,

    /// Output format
    #[arg(long, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML configuration file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse arguments without exiting the process on error
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}
