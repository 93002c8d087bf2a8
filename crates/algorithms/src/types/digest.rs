//! Fixed-capacity digest output
//!
//! Every fixed-length hasher in this crate returns a `Digest<N>` whose
//! capacity equals the algorithm's output size.

use alloc::string::String;
use core::fmt;
use core::ops::Deref;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// A digest value of at most `N` bytes
#[derive(Clone, Zeroize)]
pub struct Digest<const N: usize> {
    data: [u8; N],
    len: usize,
}

impl<const N: usize> Digest<N> {
    /// Wrap a full-length output
    pub fn new(data: [u8; N]) -> Self {
        Self { data, len: N }
    }

    /// Copy a slice of at most `N` bytes
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() > N {
            return Err(Error::Length {
                context: "Digest::from_slice",
                expected: N,
                actual: slice.len(),
            });
        }

        let mut data = [0u8; N];
        data[..slice.len()].copy_from_slice(slice);

        Ok(Self {
            data,
            len: slice.len(),
        })
    }

    /// Length of the digest in bytes
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the digest is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hexadecimal rendering
    pub fn to_hex(&self) -> String {
        hex::encode(&self.data[..self.len])
    }

    /// Parse a hexadecimal string of at most `2 * N` digits
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)
            .map_err(|_| Error::param("hex_str", "Invalid hexadecimal string"))?;

        Self::from_slice(&bytes)
    }

    /// Compare against another digest without an early exit on the first
    /// differing byte
    pub fn ct_eq(&self, other: &Self) -> bool {
        shanext_internal::constant_time::ct_eq(self.as_ref(), other.as_ref())
    }
}

impl<const N: usize> AsRef<[u8]> for Digest<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl<const N: usize> Deref for Digest<N> {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.data[..self.len]
    }
}

impl<const N: usize> PartialEq for Digest<N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.data[..self.len] == other.data[..other.len]
    }
}

impl<const N: usize> Eq for Digest<N> {}

impl<const N: usize> fmt::Debug for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest<{}>({}) [len={}]", N, self.to_hex(), self.len)
    }
}

impl<const N: usize> fmt::Display for Digest<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
