//! Pad command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, PadArgs};
use crate::config::PrepConfig;
use crate::error::Result;
use crate::pipeline::{run, write_output};

/// Apply command-line overrides on top of a loaded config
pub fn apply_overrides(config: &mut PrepConfig, args: &PadArgs) {
    if let Some(max_length) = args.max_length {
        config.padding.max_length = max_length;
    }
    if let Some(column) = &args.column {
        config.input.column = column.clone();
    }
    if let Some(output) = &args.output {
        config.output.path = Some(output.clone());
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
}

pub fn run_pad(args: PadArgs, level: LogLevel) -> Result<()> {
    let mut config = PrepConfig::from_file(&args.config)?;
    apply_overrides(&mut config, &args);

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Padding column '{}' of {} to {} ({})",
            config.input.column,
            config.input.path.display(),
            config.padding.max_length,
            config.encoding
        ),
    );

    let prepared = run(&config)?;
    let rendered = prepared.render(config.output.format)?;
    write_output(&rendered, config.output.path.as_deref())?;

    if let Some(path) = &config.output.path {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "Wrote {} sequences x {} positions to {}",
                prepared.batch_size(),
                prepared.max_length(),
                path.display()
            ),
        );
    }

    Ok(())
}
