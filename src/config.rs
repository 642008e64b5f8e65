//! Preprocessing configuration parsing and management.
//!
//! One YAML file describes where the sequences come from, how they are
//! encoded, and how wide the padded batch is.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::batch::PaddingSide;
use crate::error::{Result, SeqBatchError};

/// Complete preprocessing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepConfig {
    /// Input CSV configuration
    pub input: InputConfig,
    /// Padding configuration
    #[serde(default)]
    pub padding: PaddingConfig,
    /// Token encoding
    #[serde(default)]
    pub encoding: Encoding,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl PrepConfig {
    /// Load configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SeqBatchError::ConfigNotFound { path: path.to_path_buf() });
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeqBatchError::io(format!("reading config file: {}", path.display()), e)
        })?;

        Self::from_yaml(&content, path)
    }

    /// Parse configuration from YAML string.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| SeqBatchError::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Create a configuration with defaults for everything but the input path.
    pub fn minimal(path: impl Into<PathBuf>) -> Self {
        Self {
            input: InputConfig { path: path.into(), column: default_column() },
            padding: PaddingConfig::default(),
            encoding: Encoding::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Input CSV configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// CSV file with a header row
    pub path: PathBuf,
    /// Header of the column holding sequences
    #[serde(default = "default_column")]
    pub column: String,
}

fn default_column() -> String {
    "RNA_sequence".to_string()
}

/// Padding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaddingConfig {
    /// Target width; signed so that bad values reach validation
    #[serde(default = "default_max_length")]
    pub max_length: i64,
    /// Padding side
    #[serde(default)]
    pub side: PaddingSide,
    /// Pad sentinel for the symbols encoding
    #[serde(default)]
    pub pad_token: Option<String>,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        Self { max_length: default_max_length(), side: PaddingSide::default(), pad_token: None }
    }
}

fn default_max_length() -> i64 {
    4000
}

/// Token encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// One string per nucleotide, padded with a string sentinel
    #[default]
    Symbols,
    /// One integer id per nucleotide, padded with id 0
    Ids,
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Symbols => write!(f, "symbols"),
            Self::Ids => write!(f, "ids"),
        }
    }
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "symbols" => Ok(Self::Symbols),
            "ids" => Ok(Self::Ids),
            _ => Err(format!("Unknown encoding: {s}. Valid encodings: symbols, ids")),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Rendering format
    #[serde(default)]
    pub format: OutputFormat,
    /// Destination file; stdout when absent
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Output rendering format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single JSON document
    #[default]
    Json,
    /// One whitespace-separated line per row
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Text => write!(f, "text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(format!("Unknown output format: {s}. Valid formats: json, text")),
        }
    }
}
