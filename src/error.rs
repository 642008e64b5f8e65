//! Error types with actionable diagnostics.
//!
//! Padding itself can only fail on a bad `max_length`; the remaining variants
//! cover the configuration, CSV loading and output layers around it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for seqbatch operations.
pub type Result<T> = std::result::Result<T, SeqBatchError>;

/// Errors that can occur while preparing sequence batches.
#[derive(Error, Debug)]
pub enum SeqBatchError {
    /// A padding or pipeline setting is out of range.
    #[error("Invalid configuration for '{field}': {message}\n  → {suggestion}")]
    InvalidConfiguration { field: String, message: String, suggestion: String },

    /// Configuration file not found at expected path.
    #[error("Configuration file not found: {path}\n  → Create a config file or pass a different path")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}\n  → Check YAML syntax at the indicated line")]
    ConfigParsing { path: PathBuf, message: String },

    /// The input CSV has no column with the requested header.
    #[error("Column '{column}' not found in {path}\n  → Set input.column to one of the CSV headers")]
    MissingColumn { path: PathBuf, column: String },

    /// The input CSV could not be parsed.
    #[error("Malformed CSV in {path}: {message}")]
    Csv { path: PathBuf, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization error while rendering output.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SeqBatchError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Shorthand for a rejected `max_length`.
    pub fn invalid_max_length(max_length: i64) -> Self {
        Self::InvalidConfiguration {
            field: "max_length".into(),
            message: format!("max_length must be positive, got {max_length}"),
            suggestion: "Use the model's context width, e.g. 1000 or 4000".into(),
        }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidConfiguration { .. }
                | Self::ConfigNotFound { .. }
                | Self::ConfigParsing { .. }
                | Self::MissingColumn { .. }
                | Self::Csv { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigNotFound { .. } => "E001",
            Self::ConfigParsing { .. } => "E002",
            Self::InvalidConfiguration { .. } => "E003",
            Self::MissingColumn { .. } => "E010",
            Self::Csv { .. } => "E011",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}

impl From<serde_json::Error> for SeqBatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            SeqBatchError::invalid_max_length(0),
            SeqBatchError::ConfigNotFound { path: "".into() },
            SeqBatchError::ConfigParsing { path: "".into(), message: "".into() },
            SeqBatchError::MissingColumn { path: "".into(), column: "".into() },
            SeqBatchError::Csv { path: "".into(), message: "".into() },
            SeqBatchError::io("", std::io::Error::other("x")),
            SeqBatchError::Serialization { message: "".into() },
        ];

        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        let unique: std::collections::HashSet<_> = codes.iter().collect();
        assert_eq!(unique.len(), codes.len());
        assert!(codes.iter().all(|c| c.starts_with('E')));
    }

    #[test]
    fn test_invalid_max_length_message() {
        let err = SeqBatchError::invalid_max_length(-1);
        let msg = err.to_string();
        assert!(msg.contains("max_length"));
        assert!(msg.contains("-1"));
        assert!(err.is_user_error());
    }

    #[test]
    fn test_missing_column_mentions_setting() {
        let err = SeqBatchError::MissingColumn {
            path: "data.csv".into(),
            column: "RNA_sequence".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("RNA_sequence"));
        assert!(msg.contains("input.column"));
    }

    #[test]
    fn test_io_error_constructor() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = SeqBatchError::io("reading sequences", io_err);

        assert!(matches!(err, SeqBatchError::Io { .. }));
        assert!(err.to_string().contains("reading sequences"));
        assert!(!err.is_user_error());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SeqBatchError = json_err.into();
        assert_eq!(err.code(), "E051");
    }
}
