//! Token bound shared by the padding and mask code.

/// An opaque sequence element: a character, a symbol string or an integer id.
///
/// Padding only needs to copy tokens and compare them against the pad
/// sentinel, so any `Clone + PartialEq` type qualifies.
pub trait Token: Clone + PartialEq {}

impl<T: Clone + PartialEq> Token for T {}
