//! seqbatch CLI
//!
//! Pads nucleotide sequences into fixed-width batches with attention masks.
//!
//! # Usage
//!
//! ```bash
//! # Pad the sequences of a CSV column described by a config
//! seqbatch pad prep.yaml
//!
//! # Pad with overrides
//! seqbatch pad prep.yaml --max-length 1000 --format text --output batch.txt
//!
//! # Pad sequences given directly
//! seqbatch inline AUGCUACG GGAUC --max-length 12 --encoding ids
//!
//! # Validate config
//! seqbatch validate prep.yaml
//! ```

use clap::Parser;
use seqbatch::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = e.code(), "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
