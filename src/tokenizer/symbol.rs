//! Symbol-level encoder: one string token per character.

use super::traits::SequenceEncoder;

/// Splits a sequence into single-character string tokens.
///
/// The pad sentinel is a multi-character string (`"PAD"` by default), so it
/// cannot collide with a real single-character token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEncoder {
    pad: String,
}

impl SymbolEncoder {
    /// Default pad sentinel
    pub const DEFAULT_PAD: &'static str = "PAD";

    /// Create an encoder with a custom pad sentinel
    pub fn new(pad: impl Into<String>) -> Self {
        Self { pad: pad.into() }
    }
}

impl Default for SymbolEncoder {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAD)
    }
}

impl SequenceEncoder for SymbolEncoder {
    type Token = String;

    fn encode(&self, raw: &str) -> Vec<String> {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(String::from)
            .collect()
    }

    fn pad_token(&self) -> String {
        self.pad.clone()
    }

    fn name(&self) -> &'static str {
        "symbols"
    }
}
