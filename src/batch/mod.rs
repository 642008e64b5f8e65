//! Fixed-width batch preparation
//!
//! Pads or truncates variable-length token sequences to a common width and
//! builds the parallel attention mask a sequence model expects.
//!
//! # Example
//!
//! ```
//! use seqbatch::batch::{pad, SequenceBatchPreparer};
//!
//! fn example() -> seqbatch::Result<()> {
//!     let batch = pad(&[vec![1u32, 2, 3]], 5, 0)?;
//!     assert_eq!(batch.to_rows(), vec![vec![1, 2, 3, 0, 0]]);
//!
//!     // Reuse one validated preparer across calls
//!     let preparer = SequenceBatchPreparer::new(4, "PAD".to_string())?;
//!     let symbols = preparer.prepare(&[vec!["A".to_string(), "U".to_string()]]);
//!     assert_eq!(symbols.real_token_counts(), vec![2]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

mod mask;
mod padded;
mod preparer;
mod token;

#[cfg(test)]
mod tests;

pub use mask::{build_mask, build_mask_batch};
pub use padded::PaddedBatch;
pub use preparer::{pad, PaddingSide, SequenceBatchPreparer};
pub use token::Token;
