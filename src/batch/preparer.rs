//! Sequence batch preparer: pad short sequences, truncate long ones

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::padded::PaddedBatch;
use super::token::Token;
use crate::error::{Result, SeqBatchError};

/// Side on which pad tokens are inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaddingSide {
    /// Real tokens first, padding after
    #[default]
    Right,
    /// Padding first, real tokens after
    Left,
}

impl std::fmt::Display for PaddingSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Right => write!(f, "right"),
            Self::Left => write!(f, "left"),
        }
    }
}

impl std::str::FromStr for PaddingSide {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "right" => Ok(Self::Right),
            "left" => Ok(Self::Left),
            _ => Err(format!("Unknown padding side: {s}. Valid sides: right, left")),
        }
    }
}

/// Pads or truncates every sequence of a batch to `max_length` tokens.
///
/// Construct once with the target width and pad sentinel, then reuse for
/// every batch. Sequences longer than `max_length` keep their first
/// `max_length` tokens and lose the rest without any error; callers that need
/// the original length must record it themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceBatchPreparer<T> {
    max_length: usize,
    pad_token: T,
    side: PaddingSide,
}

impl<T: Token> SequenceBatchPreparer<T> {
    /// Create a preparer.
    ///
    /// Fails with [`SeqBatchError::InvalidConfiguration`] if `max_length <= 0`.
    pub fn new(max_length: i64, pad_token: T) -> Result<Self> {
        let width = usize::try_from(max_length)
            .ok()
            .filter(|&width| width > 0)
            .ok_or_else(|| SeqBatchError::invalid_max_length(max_length))?;

        Ok(Self { max_length: width, pad_token, side: PaddingSide::Right })
    }

    /// Set padding side
    #[must_use]
    pub fn pad_side(mut self, side: PaddingSide) -> Self {
        self.side = side;
        self
    }

    /// Target row width
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Pad sentinel
    #[must_use]
    pub fn pad_token(&self) -> &T {
        &self.pad_token
    }

    /// Padding side
    #[must_use]
    pub fn side(&self) -> PaddingSide {
        self.side
    }

    /// Pad or truncate a single sequence to exactly `max_length` tokens
    #[must_use]
    pub fn pad_sequence(&self, sequence: &[T]) -> Vec<T> {
        (0..self.max_length).map(|col| self.token_at(sequence, col)).collect()
    }

    /// Pad or truncate every sequence and build the attention mask.
    ///
    /// The mask marks exactly the injected positions as padding, so a real
    /// token equal to the sentinel is still attended. Use
    /// [`build_mask`](super::build_mask) to rebuild a mask from values alone.
    #[must_use]
    pub fn prepare(&self, sequences: &[Vec<T>]) -> PaddedBatch<T> {
        let shape = (sequences.len(), self.max_length);

        let tokens = Array2::from_shape_fn(shape, |(row, col)| self.token_at(&sequences[row], col));
        let mask = Array2::from_shape_fn(shape, |(row, col)| self.is_real(&sequences[row], col));

        tracing::debug!(
            batch_size = shape.0,
            max_length = shape.1,
            side = %self.side,
            "prepared padded batch"
        );

        PaddedBatch::new(tokens, mask)
    }

    fn kept(&self, sequence: &[T]) -> usize {
        sequence.len().min(self.max_length)
    }

    /// Column at which real tokens start in the output row
    fn offset(&self, sequence: &[T]) -> usize {
        match self.side {
            PaddingSide::Right => 0,
            PaddingSide::Left => self.max_length - self.kept(sequence),
        }
    }

    fn is_real(&self, sequence: &[T], col: usize) -> bool {
        let start = self.offset(sequence);
        col >= start && col < start + self.kept(sequence)
    }

    fn token_at(&self, sequence: &[T], col: usize) -> T {
        if self.is_real(sequence, col) {
            sequence[col - self.offset(sequence)].clone()
        } else {
            self.pad_token.clone()
        }
    }
}

/// Pad or truncate `sequences` to `max_length` with `pad_token`.
///
/// One-shot form of [`SequenceBatchPreparer::prepare`] with right padding.
/// Fails with [`SeqBatchError::InvalidConfiguration`] if `max_length <= 0`.
pub fn pad<T: Token>(sequences: &[Vec<T>], max_length: i64, pad_token: T) -> Result<PaddedBatch<T>> {
    Ok(SequenceBatchPreparer::new(max_length, pad_token)?.prepare(sequences))
}
