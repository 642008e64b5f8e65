//! Fixed-width batch preparation for nucleotide sequence models.
//!
//! Sequence models want rectangular input: every row the same width, plus a
//! mask saying which positions hold real tokens. This crate provides:
//! - [`batch`]: padding/truncation to `max_length` and attention masks, generic
//!   over the token type
//! - [`tokenizer`]: nucleotide encoders producing string symbols or integer ids
//! - [`loader`]: reading sequences from a CSV column
//! - [`config`] and [`validation`]: a YAML preprocessing configuration
//! - [`pipeline`]: load, encode and pad in one call
//!
//! # Example
//!
//! ```
//! use seqbatch::batch::pad;
//!
//! let batch = pad(&[vec![1, 2, 3], vec![1, 2, 3, 4, 5, 6]], 5, 0).unwrap();
//! assert_eq!(batch.to_rows(), vec![vec![1, 2, 3, 0, 0], vec![1, 2, 3, 4, 5]]);
//! assert_eq!(batch.real_token_counts(), vec![3, 5]);
//! ```

pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod tokenizer;
pub mod validation;

pub use batch::{build_mask, pad, PaddedBatch, PaddingSide, SequenceBatchPreparer};
pub use config::{Encoding, OutputFormat, PrepConfig};
pub use error::{Result, SeqBatchError};
pub use pipeline::{prepare_strings, run, PreparedBatch};
pub use validation::ConfigValidator;
