//! Encoder trait definition.

use crate::batch::Token;

/// Token ID type
pub type TokenId = u32;

/// Converts a raw sequence string into tokens and names its pad sentinel
pub trait SequenceEncoder: Send + Sync {
    /// Token type produced by this encoder
    type Token: Token;

    /// Encode a raw sequence
    fn encode(&self, raw: &str) -> Vec<Self::Token>;

    /// Sentinel used to fill padded positions
    fn pad_token(&self) -> Self::Token;

    /// Short name used in output and logs
    fn name(&self) -> &'static str;

    /// Encode many sequences
    fn encode_batch(&self, raws: &[String]) -> Vec<Vec<Self::Token>> {
        raws.iter().map(|raw| self.encode(raw)).collect()
    }
}
