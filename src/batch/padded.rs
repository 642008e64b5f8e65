//! Padded batch returned by the preparer

use ndarray::{Array2, ArrayView1};

/// Rectangular batch of fixed-width sequences with a parallel attention mask.
///
/// Both arrays have shape `[batch_size, max_length]`. A mask entry is `true`
/// iff the token at that position is not the pad sentinel. The batch is
/// read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PaddedBatch<T> {
    tokens: Array2<T>,
    mask: Array2<bool>,
}

impl<T> PaddedBatch<T> {
    pub(crate) fn new(tokens: Array2<T>, mask: Array2<bool>) -> Self {
        debug_assert_eq!(tokens.dim(), mask.dim());
        Self { tokens, mask }
    }

    /// Number of sequences in the batch
    #[must_use]
    pub fn batch_size(&self) -> usize {
        self.tokens.nrows()
    }

    /// Width of every row
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.tokens.ncols()
    }

    /// Check if the batch holds no sequences
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch_size() == 0
    }

    /// Token ids or symbols [batch_size, max_length]
    #[must_use]
    pub fn tokens(&self) -> &Array2<T> {
        &self.tokens
    }

    /// Attention mask [batch_size, max_length]
    #[must_use]
    pub fn mask(&self) -> &Array2<bool> {
        &self.mask
    }

    /// Tokens of a single row, or `None` if out of range
    #[must_use]
    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, T>> {
        (index < self.batch_size()).then(|| self.tokens.row(index))
    }

    /// Float mask (1.0 = attend, 0.0 = padding), the form most models consume
    #[must_use]
    pub fn mask_f32(&self) -> Array2<f32> {
        self.mask.mapv(|attend| if attend { 1.0 } else { 0.0 })
    }

    /// Integer mask (1 = attend, 0 = padding)
    #[must_use]
    pub fn mask_u8(&self) -> Array2<u8> {
        self.mask.mapv(u8::from)
    }

    /// Number of non-padding positions per row
    #[must_use]
    pub fn real_token_counts(&self) -> Vec<usize> {
        self.mask
            .rows()
            .into_iter()
            .map(|row| row.iter().filter(|&&attend| attend).count())
            .collect()
    }

    /// Consume the batch into its token and mask arrays
    #[must_use]
    pub fn into_parts(self) -> (Array2<T>, Array2<bool>) {
        (self.tokens, self.mask)
    }
}

impl<T: Clone> PaddedBatch<T> {
    /// Copy the tokens out as nested vectors, one per row
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.tokens.rows().into_iter().map(|row| row.to_vec()).collect()
    }

    /// Copy the mask out as nested vectors, one per row
    #[must_use]
    pub fn mask_rows(&self) -> Vec<Vec<bool>> {
        self.mask.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
