//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::PrepConfig;
use crate::error::Result;
use crate::validation::ConfigValidator;

/// Format configuration summary as a string
pub fn format_config_info(config: &PrepConfig) -> String {
    let mut lines = vec![
        format!("  Input: {}", config.input.path.display()),
        format!("  Column: {}", config.input.column),
        format!("  Encoding: {}", config.encoding),
        format!("  Max length: {}", config.padding.max_length),
        format!("  Padding side: {}", config.padding.side),
    ];
    if let Some(pad) = &config.padding.pad_token {
        lines.push(format!("  Pad token: {pad}"));
    }
    if let Some(path) = &config.output.path {
        lines.push(format!("  Output: {}", path.display()));
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    let config = PrepConfig::from_file(&args.config)?;
    ConfigValidator::validate(&config)?;

    log(level, LogLevel::Normal, &format!("Configuration valid: {}", args.config.display()));
    log(level, LogLevel::Verbose, &format_config_info(&config));
    Ok(())
}
