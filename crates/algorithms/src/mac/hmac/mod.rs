//! Hash-based Message Authentication Code (HMAC)
//!
//! HMAC as specified in RFC 2104, generic over every fixed-output hasher in
//! this crate. Keys longer than the hash's block size are hashed first;
//! shorter keys are zero-padded to the block size.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use shanext_common::security::SecretBuffer;
use shanext_params::utils::hash::MAX_HASH_BLOCK_SIZE;
use zeroize::Zeroize;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// HMAC keyed with a fixed key
///
/// The inner hasher is primed with `K' ^ ipad` at construction. The outer
/// pad is kept until `finalize`. A finalized instance rejects further input;
/// call [`Hmac::reset`] to start a new message under the same key.
#[derive(Clone)]
pub struct Hmac<H: HashFunction + Clone> {
    hash: H,
    ipad: SecretBuffer<MAX_HASH_BLOCK_SIZE>,
    opad: SecretBuffer<MAX_HASH_BLOCK_SIZE>,
    block_size: usize,
    is_finalized: bool,
}

impl<H: HashFunction + Clone> Hmac<H> {
    /// Create a new HMAC instance with the given key
    pub fn new(key: &[u8]) -> Result<Self> {
        let block_size = H::block_size();
        validate::max_length("HMAC block size", block_size, MAX_HASH_BLOCK_SIZE)?;

        let mut k_prime = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        if key.len() > block_size {
            let hashed = H::digest(key)?;
            let hashed = hashed.as_ref();
            k_prime.as_mut_slice()[..hashed.len()].copy_from_slice(hashed);
        } else {
            k_prime.as_mut_slice()[..key.len()].copy_from_slice(key);
        }

        let mut ipad = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        let mut opad = SecretBuffer::<MAX_HASH_BLOCK_SIZE>::zeroed();
        for (i, &k) in k_prime.as_slice()[..block_size].iter().enumerate() {
            ipad.as_mut_slice()[i] = k ^ IPAD;
            opad.as_mut_slice()[i] = k ^ OPAD;
        }

        let mut hash = H::new();
        hash.update(&ipad.as_slice()[..block_size])?;

        Ok(Self {
            hash,
            ipad,
            opad,
            block_size,
            is_finalized: false,
        })
    }

    /// Absorb message data
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.is_finalized {
            return Err(Error::Processing {
                operation: "HMAC update",
                details: "instance already finalized",
            });
        }
        self.hash.update(data)?;
        Ok(())
    }

    /// Produce the tag `H((K' ^ opad) || H((K' ^ ipad) || m))`
    pub fn finalize(&mut self) -> Result<Vec<u8>> {
        if self.is_finalized {
            return Err(Error::Processing {
                operation: "HMAC finalize",
                details: "instance already finalized",
            });
        }
        self.is_finalized = true;

        let inner = self.hash.finalize()?;

        let mut outer = H::new();
        outer.update(&self.opad.as_slice()[..self.block_size])?;
        outer.update(inner.as_ref())?;
        let tag = outer.finalize()?;

        Ok(tag.as_ref().to_vec())
    }

    /// Start a new message under the same key
    pub fn reset(&mut self) -> Result<()> {
        self.hash = H::new();
        self.hash.update(&self.ipad.as_slice()[..self.block_size])?;
        self.is_finalized = false;
        Ok(())
    }

    /// One-shot MAC of `data` under `key`
    pub fn mac(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
        let mut h = Self::new(key)?;
        h.update(data)?;
        h.finalize()
    }

    /// Recompute the MAC and compare it to `tag` in constant time
    ///
    /// A tag of the wrong length compares unequal without examining content.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> Result<bool> {
        let mut expected = Self::mac(key, data)?;
        let ok = shanext_internal::ct_eq(&expected, tag);
        expected.zeroize();
        Ok(ok)
    }

    /// Output size of the underlying hash in bytes
    pub fn output_size() -> usize {
        H::output_size()
    }
}

impl<H: HashFunction + Clone> Zeroize for Hmac<H> {
    fn zeroize(&mut self) {
        self.ipad.zeroize();
        self.opad.zeroize();
        self.hash = H::new();
        self.is_finalized = true;
    }
}
