//! Preprocessing pipeline: load, encode, pad.

use std::path::Path;

use serde::Serialize;

use crate::batch::{PaddedBatch, SequenceBatchPreparer};
use crate::config::{Encoding, OutputFormat, PrepConfig};
use crate::error::{Result, SeqBatchError};
use crate::loader::load_sequences;
use crate::tokenizer::{NucleotideVocab, SequenceEncoder, SymbolEncoder, TokenId};
use crate::validation::ConfigValidator;

/// Padded batch tagged with the encoding that produced it
#[derive(Debug, Clone, PartialEq)]
pub enum PreparedBatch {
    /// Single-character string tokens
    Symbols(PaddedBatch<String>),
    /// Nucleotide ids
    Ids(PaddedBatch<TokenId>),
}

/// JSON view of a prepared batch
#[derive(Serialize)]
struct BatchRecord<T> {
    encoding: Encoding,
    batch_size: usize,
    max_length: usize,
    tokens: Vec<Vec<T>>,
    mask: Vec<Vec<u8>>,
}

impl PreparedBatch {
    /// Encoding of the tokens
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Symbols(_) => Encoding::Symbols,
            Self::Ids(_) => Encoding::Ids,
        }
    }

    /// Number of sequences
    #[must_use]
    pub fn batch_size(&self) -> usize {
        match self {
            Self::Symbols(batch) => batch.batch_size(),
            Self::Ids(batch) => batch.batch_size(),
        }
    }

    /// Width of every row
    #[must_use]
    pub fn max_length(&self) -> usize {
        match self {
            Self::Symbols(batch) => batch.max_length(),
            Self::Ids(batch) => batch.max_length(),
        }
    }

    /// Render as a single JSON document
    pub fn to_json(&self) -> Result<String> {
        let json = match self {
            Self::Symbols(batch) => serde_json::to_string(&Self::record(batch, self.encoding()))?,
            Self::Ids(batch) => serde_json::to_string(&Self::record(batch, self.encoding()))?,
        };
        Ok(json)
    }

    /// Render one line per row: tokens, a tab, then the 0/1 mask
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Symbols(batch) => Self::text_rows(batch),
            Self::Ids(batch) => Self::text_rows(batch),
        }
    }

    /// Render in `format`
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.to_json(),
            OutputFormat::Text => Ok(self.to_text()),
        }
    }

    fn record<T: Clone>(batch: &PaddedBatch<T>, encoding: Encoding) -> BatchRecord<T> {
        BatchRecord {
            encoding,
            batch_size: batch.batch_size(),
            max_length: batch.max_length(),
            tokens: batch.to_rows(),
            mask: batch.mask_u8().rows().into_iter().map(|row| row.to_vec()).collect(),
        }
    }

    fn text_rows<T: Clone + ToString>(batch: &PaddedBatch<T>) -> String {
        batch
            .to_rows()
            .iter()
            .zip(batch.mask_rows())
            .map(|(tokens, mask)| {
                let tokens: Vec<String> = tokens.iter().map(ToString::to_string).collect();
                let mask: String = mask.iter().map(|&attend| if attend { '1' } else { '0' }).collect();
                format!("{}\t{}", tokens.join(" "), mask)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pad sentinel a config selects for the symbols encoding
#[must_use]
pub fn pad_symbol(config: &PrepConfig) -> String {
    config
        .padding
        .pad_token
        .clone()
        .unwrap_or_else(|| SymbolEncoder::DEFAULT_PAD.to_string())
}

/// Run the full pipeline: validate, load the CSV column, encode, pad.
pub fn run(config: &PrepConfig) -> Result<PreparedBatch> {
    ConfigValidator::validate(config)?;

    let raws = load_sequences(&config.input.path, &config.input.column)?;
    prepare_strings(&raws, config)
}

/// Encode and pad raw sequence strings with the settings of `config`.
pub fn prepare_strings(raws: &[String], config: &PrepConfig) -> Result<PreparedBatch> {
    ConfigValidator::validate_padding(config)?;

    let prepared = match config.encoding {
        Encoding::Symbols => {
            PreparedBatch::Symbols(encode_and_pad(&SymbolEncoder::new(pad_symbol(config)), raws, config)?)
        }
        Encoding::Ids => PreparedBatch::Ids(encode_and_pad(&NucleotideVocab::new(), raws, config)?),
    };

    tracing::info!(
        encoding = %prepared.encoding(),
        batch_size = prepared.batch_size(),
        max_length = prepared.max_length(),
        "prepared batch"
    );

    Ok(prepared)
}

fn encode_and_pad<E: SequenceEncoder>(
    encoder: &E,
    raws: &[String],
    config: &PrepConfig,
) -> Result<PaddedBatch<E::Token>> {
    let preparer = SequenceBatchPreparer::new(config.padding.max_length, encoder.pad_token())?
        .pad_side(config.padding.side);

    Ok(preparer.prepare(&encoder.encode_batch(raws)))
}

/// Write rendered output to `path`, or stdout when `None`.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{rendered}\n"))
            .map_err(|e| SeqBatchError::io(format!("writing output: {}", path.display()), e)),
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
