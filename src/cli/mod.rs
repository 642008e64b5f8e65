//! CLI module for seqbatch
//!
//! Argument parsing, command handlers and log setup for the `seqbatch` binary.

mod args;
mod commands;
mod logging;

pub use args::{parse_args, Cli, Command, InlineArgs, PadArgs, ValidateArgs};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
