//! Object-safe operations shared by every digest and derivation primitive

use crate::error::Result;
use alloc::vec::Vec;

/// A primitive that turns an input byte string into a fixed- or
/// caller-chosen-length output
///
/// Implemented by the dispatch enum so callers can hold
/// `Box<dyn DigestPrimitive>` without naming a concrete hasher.
pub trait DigestPrimitive: Send + Sync {
    /// Canonical name, e.g. `"SHA-256"`
    fn name(&self) -> &'static str;

    /// Number of bytes `compute` returns
    fn output_len(&self) -> usize;

    /// Whether the output length is chosen by the caller rather than
    /// fixed by the algorithm
    fn is_variable_length(&self) -> bool {
        false
    }

    /// Hash or derive over `input` in one shot
    fn compute(&self, input: &[u8]) -> Result<Vec<u8>>;
}

impl<T: DigestPrimitive + ?Sized> DigestPrimitive for alloc::boxed::Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn output_len(&self) -> usize {
        (**self).output_len()
    }

    fn is_variable_length(&self) -> bool {
        (**self).is_variable_length()
    }

    fn compute(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).compute(input)
    }
}
