//! Attention mask construction

use ndarray::Array2;

use super::token::Token;

/// Build the attention mask for one padded sequence.
///
/// A position is `true` (attend) iff its token differs from `pad_token`.
///
/// # Sentinel ambiguity
///
/// The mask is derived from token values alone. A real token that happens to
/// equal `pad_token` is indistinguishable from padding and is marked `false`:
///
/// ```
/// use seqbatch::batch::build_mask;
///
/// // The real 0 at position 1 is reported as padding.
/// assert_eq!(build_mask(&[1, 0, 3, 0, 0], &0), vec![true, false, true, false, false]);
/// ```
///
/// Callers whose data may contain the sentinel should pick a pad value
/// outside their alphabet, as [`NucleotideVocab`](crate::tokenizer::NucleotideVocab)
/// does by reserving id 0.
pub fn build_mask<T: Token>(padded: &[T], pad_token: &T) -> Vec<bool> {
    padded.iter().map(|token| token != pad_token).collect()
}

/// Build the attention mask for a whole padded batch.
///
/// Same sentinel comparison as [`build_mask`], applied element-wise.
pub fn build_mask_batch<T: Token>(tokens: &Array2<T>, pad_token: &T) -> Array2<bool> {
    tokens.map(|token| token != pad_token)
}
