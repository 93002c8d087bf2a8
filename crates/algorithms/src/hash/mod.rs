//! Fixed-output message digests
//!
//! Every hasher here is incremental: `update` may be called any number of
//! times and `finalize` returns the digest of everything absorbed so far,
//! then returns the hasher to its initial state.

use alloc::string::String;

use crate::error::Result;

pub mod md;
pub mod md5;
pub mod ripemd160;
pub mod sha1;
pub mod sha2;
pub mod sha3;
pub mod whirlpool;

pub use md5::Md5;
pub use ripemd160::Ripemd160;
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
pub use sha3::Sha3_256;
pub use whirlpool::Whirlpool;

/// Compile-time description of a digest algorithm
pub trait HashAlgorithm {
    /// Output size in bytes
    const OUTPUT_SIZE: usize;
    /// Block size in bytes (the rate, for sponge-based hashes)
    const BLOCK_SIZE: usize;
    /// Canonical name
    const ALGORITHM_ID: &'static str;
}

/// Incremental hash function
pub trait HashFunction: Sized {
    /// Marker describing the algorithm
    type Algorithm: HashAlgorithm;

    /// Digest type returned by `finalize`
    type Output: AsRef<[u8]> + Clone;

    /// Fresh hasher in its initial state
    fn new() -> Self;

    /// Absorb more input
    fn update(&mut self, data: &[u8]) -> Result<&mut Self>;

    /// Produce the digest and reset to the initial state
    fn finalize(&mut self) -> Result<Self::Output>;

    /// Output size in bytes
    fn output_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::OUTPUT_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        <Self::Algorithm as HashAlgorithm>::BLOCK_SIZE
    }

    /// Canonical name
    fn name() -> String {
        String::from(<Self::Algorithm as HashAlgorithm>::ALGORITHM_ID)
    }

    /// One-shot digest of `data`
    fn digest(data: &[u8]) -> Result<Self::Output> {
        let mut h = Self::new();
        h.update(data)?;
        h.finalize()
    }
}
