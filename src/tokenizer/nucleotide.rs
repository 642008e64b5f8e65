//! Fixed nucleotide vocabulary with a reserved pad id.

use super::traits::{SequenceEncoder, TokenId};

/// Maps nucleotide symbols to integer ids.
///
/// Id 0 is reserved for padding and id 1 for unknown symbols, so encoded
/// real input never equals the pad sentinel. Input is uppercased and
/// whitespace is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NucleotideVocab;

impl NucleotideVocab {
    /// Padding id
    pub const PAD_ID: TokenId = 0;
    /// Unknown symbol id
    pub const UNK_ID: TokenId = 1;
    /// Known symbols, assigned ids starting at 2
    pub const SYMBOLS: [char; 6] = ['A', 'C', 'G', 'U', 'T', 'N'];

    const FIRST_SYMBOL_ID: TokenId = 2;

    /// Create the vocabulary
    pub fn new() -> Self {
        Self
    }

    /// Total number of ids, special ids included
    pub fn vocab_size(&self) -> usize {
        Self::SYMBOLS.len() + Self::FIRST_SYMBOL_ID as usize
    }

    /// Id for a single symbol
    pub fn symbol_to_id(&self, symbol: char) -> TokenId {
        let upper = symbol.to_ascii_uppercase();
        Self::SYMBOLS
            .iter()
            .position(|&known| known == upper)
            .map_or(Self::UNK_ID, |idx| idx as TokenId + Self::FIRST_SYMBOL_ID)
    }

    /// Symbol for an id, `None` for special or out-of-range ids
    pub fn id_to_symbol(&self, id: TokenId) -> Option<char> {
        let idx = id.checked_sub(Self::FIRST_SYMBOL_ID)?;
        Self::SYMBOLS.get(idx as usize).copied()
    }

    /// Decode ids back to a sequence string, skipping pad and unknown ids
    pub fn decode(&self, ids: &[TokenId]) -> String {
        ids.iter().filter_map(|&id| self.id_to_symbol(id)).collect()
    }
}

impl SequenceEncoder for NucleotideVocab {
    type Token = TokenId;

    fn encode(&self, raw: &str) -> Vec<TokenId> {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| self.symbol_to_id(c))
            .collect()
    }

    fn pad_token(&self) -> TokenId {
        Self::PAD_ID
    }

    fn name(&self) -> &'static str {
        "ids"
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_encoded_never_pad(text in "\\PC{0,64}") {
            let vocab = NucleotideVocab::new();
            let ids = vocab.encode(&text);
            prop_assert!(!ids.contains(&NucleotideVocab::PAD_ID));
        }

        #[test]
        fn prop_nucleotide_roundtrip(text in "[ACGUTN]{0,64}") {
            let vocab = NucleotideVocab::new();
            let decoded = vocab.decode(&vocab.encode(&text));
            prop_assert_eq!(decoded, text);
        }
    }
}
