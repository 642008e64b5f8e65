//! Inline command implementation

use crate::cli::logging::log;
use crate::cli::{InlineArgs, LogLevel};
use crate::config::PrepConfig;
use crate::error::Result;
use crate::pipeline::{prepare_strings, write_output};

/// Build the config an inline run uses; the input section is never read
pub fn inline_config(args: &InlineArgs) -> PrepConfig {
    let mut config = PrepConfig::minimal("");
    config.padding.max_length = args.max_length;
    config.padding.side = args.side;
    config.padding.pad_token = args.pad_token.clone();
    config.encoding = args.encoding;
    config.output.format = args.format;
    config
}

pub fn run_inline(args: InlineArgs, level: LogLevel) -> Result<()> {
    let config = inline_config(&args);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Padding {} sequences to {} ({}, {} side)",
            args.sequences.len(),
            config.padding.max_length,
            config.encoding,
            config.padding.side
        ),
    );

    let prepared = prepare_strings(&args.sequences, &config)?;
    write_output(&prepared.render(config.output.format)?, None)
}
