//! Nucleotide Encoders
//!
//! Turn raw RNA/DNA strings into token sequences ready for padding. Two
//! encodings are provided, each with its own pad sentinel:
//!
//! - [`SymbolEncoder`]: one `String` per nucleotide, padded with `"PAD"`
//! - [`NucleotideVocab`]: one integer id per nucleotide, padded with id 0
//!
//! # Example
//!
//! ```
//! use seqbatch::tokenizer::{NucleotideVocab, SequenceEncoder};
//!
//! let vocab = NucleotideVocab::new();
//! let ids = vocab.encode("AUGC");
//! assert_eq!(ids.len(), 4);
//! assert!(!ids.contains(&vocab.pad_token()));
//! assert_eq!(vocab.decode(&ids), "AUGC");
//! ```

mod nucleotide;
mod symbol;
mod traits;

pub use nucleotide::NucleotideVocab;
pub use symbol::SymbolEncoder;
pub use traits::{SequenceEncoder, TokenId};
