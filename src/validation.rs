//! Configuration validation.
//!
//! Catches bad settings before any file is read and explains how to fix them.

use crate::config::{Encoding, InputConfig, PaddingConfig, PrepConfig};
use crate::error::{Result, SeqBatchError};

/// Preprocessing configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a preprocessing configuration.
    ///
    /// Returns `Ok(())` if valid, or an error with actionable suggestions.
    pub fn validate(config: &PrepConfig) -> Result<()> {
        Self::validate_input(&config.input)?;
        Self::validate_padding(config)
    }

    /// Validate only the padding and encoding settings.
    ///
    /// Used when sequences do not come from the configured input file.
    pub fn validate_padding(config: &PrepConfig) -> Result<()> {
        Self::check_padding(&config.padding, config.encoding)
    }

    fn validate_input(config: &InputConfig) -> Result<()> {
        if config.path.as_os_str().is_empty() {
            return Err(SeqBatchError::InvalidConfiguration {
                field: "input.path".into(),
                message: "Input path cannot be empty".into(),
                suggestion: "Point input.path at a CSV file with a header row".into(),
            });
        }

        if config.column.trim().is_empty() {
            return Err(SeqBatchError::InvalidConfiguration {
                field: "input.column".into(),
                message: "Input column cannot be empty".into(),
                suggestion: "Use the header of the sequence column, e.g. 'RNA_sequence'".into(),
            });
        }

        Ok(())
    }

    fn check_padding(config: &PaddingConfig, encoding: Encoding) -> Result<()> {
        if config.max_length <= 0 {
            return Err(SeqBatchError::InvalidConfiguration {
                field: "padding.max_length".into(),
                message: format!("max_length must be positive, got {}", config.max_length),
                suggestion: "Use the model's context width, e.g. 1000 or 4000".into(),
            });
        }

        match (&config.pad_token, encoding) {
            (Some(pad), Encoding::Symbols) if pad.is_empty() => {
                Err(SeqBatchError::InvalidConfiguration {
                    field: "padding.pad_token".into(),
                    message: "Pad token cannot be empty".into(),
                    suggestion: "Use a string outside the sequence alphabet, e.g. 'PAD'".into(),
                })
            }
            (Some(_), Encoding::Ids) => Err(SeqBatchError::InvalidConfiguration {
                field: "padding.pad_token".into(),
                message: "The ids encoding always pads with id 0".into(),
                suggestion: "Remove padding.pad_token or switch to 'encoding: symbols'".into(),
            }),
            _ => Ok(()),
        }
    }
}
