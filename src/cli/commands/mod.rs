//! CLI command implementations

mod inline;
mod pad;
mod validate;


use crate::cli::{Cli, Command, LogLevel};
use crate::error::Result;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<()> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    match cli.command {
        Command::Pad(args) => pad::run_pad(args, log_level),
        Command::Inline(args) => inline::run_inline(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
