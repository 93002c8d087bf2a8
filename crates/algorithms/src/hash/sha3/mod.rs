//! SHA3-256 (FIPS 202)
//!
//! Fixed-output front end to the Keccak sponge with a 136-byte rate and the
//! `0x06` domain suffix.

use crate::error::Result;
use crate::hash::{HashAlgorithm, HashFunction};
use crate::sponge::Sponge;
use crate::types::Digest;
use shanext_params::utils::hash::{SHA3_256_OUTPUT_SIZE, SHA3_256_RATE, SHA3_SUFFIX};

/// Marker type for **SHA3-256**.
pub enum Sha3_256Algorithm {}

impl HashAlgorithm for Sha3_256Algorithm {
    const OUTPUT_SIZE: usize = SHA3_256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA3_256_RATE;
    const ALGORITHM_ID: &'static str = "SHA3-256";
}

/// SHA3-256 hasher state
#[derive(Clone)]
pub struct Sha3_256 {
    sponge: Sponge,
}

impl HashFunction for Sha3_256 {
    type Algorithm = Sha3_256Algorithm;
    type Output = Digest<SHA3_256_OUTPUT_SIZE>;

    fn new() -> Self {
        Self {
            sponge: Sponge::with_fixed_params(SHA3_256_RATE, SHA3_SUFFIX),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        self.sponge.absorb(data)?;
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let mut out = [0u8; SHA3_256_OUTPUT_SIZE];
        self.sponge.squeeze(&mut out)?;
        self.sponge.reset();
        Ok(Digest::new(out))
    }
}
