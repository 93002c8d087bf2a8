//! Legacy XOR-chain password hash
//!
//! Reproduces the password hash that older stored records were produced
//! with under the name "Argon2". It is NOT RFC 9106 Argon2: there is no
//! BLAKE2b compression and no data-dependent lattice, only XOR chaining
//! over 4 KiB blocks. Use it to check existing records, never to create
//! new ones.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use crate::kdf::{KdfAlgorithm, KeyDerivationFunction, ParamProvider};
use byteorder::{ByteOrder, LittleEndian};
use shanext_common::security::SecretVec;
use shanext_params::utils::kdf::{
    LEGACY_ARGON2_BLOCK_SIZE, LEGACY_ARGON2_DEFAULT_MEMORY, LEGACY_ARGON2_DEFAULT_OUTPUT,
    LEGACY_ARGON2_DEFAULT_PARALLELISM, LEGACY_ARGON2_DEFAULT_TIME, LEGACY_ARGON2_SALT_SIZE,
};
use zeroize::Zeroizing;

const BLOCK: usize = LEGACY_ARGON2_BLOCK_SIZE;

/// Type-level constants for the legacy hash
pub enum LegacyArgon2Algorithm {}

impl KdfAlgorithm for LegacyArgon2Algorithm {
    const MIN_SALT_SIZE: usize = LEGACY_ARGON2_SALT_SIZE;
    const DEFAULT_OUTPUT_SIZE: usize = LEGACY_ARGON2_DEFAULT_OUTPUT;
    const ALGORITHM_ID: &'static str = "legacy-argon2";
}

/// Cost parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegacyArgon2Params {
    /// Memory in bytes; rounded down to whole 4096-byte blocks
    pub memory_cost: u32,
    /// Number of mixing passes over all blocks
    pub time_cost: u32,
    /// Accepted for record compatibility, has no effect
    pub parallelism: u32,
    /// Output length in bytes, at most one block
    pub output_len: usize,
}

impl Default for LegacyArgon2Params {
    fn default() -> Self {
        Self {
            memory_cost: LEGACY_ARGON2_DEFAULT_MEMORY,
            time_cost: LEGACY_ARGON2_DEFAULT_TIME,
            parallelism: LEGACY_ARGON2_DEFAULT_PARALLELISM,
            output_len: LEGACY_ARGON2_DEFAULT_OUTPUT,
        }
    }
}

impl LegacyArgon2Params {
    /// Number of 4096-byte blocks the memory cost buys
    pub fn blocks(&self) -> usize {
        self.memory_cost as usize / BLOCK
    }
}

/// The legacy XOR-chain password hash
#[derive(Clone, Debug, Default)]
pub struct LegacyArgon2 {
    params: LegacyArgon2Params,
}

impl LegacyArgon2 {
    /// Hash `password` with `salt`
    ///
    /// Block 0 is seeded from `password || salt`, the last block from
    /// `salt || password`, and each block in between from its predecessor.
    /// Every pass then mixes each block with the block its first four bytes
    /// (as a little-endian `i32`, Euclidean remainder) point at. The output
    /// is a prefix of the last block.
    pub fn hash(
        password: &[u8],
        salt: &[u8],
        params: &LegacyArgon2Params,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::non_empty("password", password)?;
        let blocks = params.blocks();
        validate::parameter(
            blocks >= 1,
            "memory_cost",
            "memory cost must cover at least one 4096-byte block",
        )?;
        validate::parameter(params.output_len >= 1, "output_len", "output length must be > 0")?;
        validate::max_length("legacy hash output", params.output_len, BLOCK)?;

        tracing::debug!(
            blocks,
            time_cost = params.time_cost,
            output_len = params.output_len,
            "legacy argon2 hash"
        );

        let mut memory =
            SecretVec::try_zeroed(blocks * BLOCK).map_err(|_| Error::ResourceExhaustion {
                context: "legacy hash blocks",
                requested: blocks * BLOCK,
            })?;
        let m = memory.as_mut_slice();
        let last = blocks - 1;

        fill(password, salt, block_mut(m, 0));
        fill(salt, password, block_mut(m, last));

        for i in 1..last {
            let (head, tail) = m.split_at_mut(i * BLOCK);
            let prev = &head[(i - 1) * BLOCK..];
            let cur = &mut tail[..BLOCK];
            let seed = Zeroizing::new(cur.to_vec());
            fill(prev, &seed, cur);
        }

        for _ in 0..params.time_cost {
            for i in 0..blocks {
                let word = LittleEndian::read_i32(&m[i * BLOCK..]);
                let j = word.rem_euclid(blocks as i32) as usize;
                let other = Zeroizing::new(m[j * BLOCK..(j + 1) * BLOCK].to_vec());
                let cur = block_mut(m, i);
                let seed = Zeroizing::new(cur.to_vec());
                fill(&seed, &other, cur);
            }
        }

        let out = &m[last * BLOCK..last * BLOCK + params.output_len];
        Ok(Zeroizing::new(out.to_vec()))
    }
}

fn block_mut(m: &mut [u8], i: usize) -> &mut [u8] {
    &mut m[i * BLOCK..(i + 1) * BLOCK]
}

/// `out[i] = buf[i % len] ^ buf[(i + 1) % len]` with `buf = a || b`
fn fill(a: &[u8], b: &[u8], out: &mut [u8]) {
    let mut buf = Zeroizing::new(Vec::with_capacity(a.len() + b.len()));
    buf.extend_from_slice(a);
    buf.extend_from_slice(b);

    let len = buf.len();
    for (i, o) in out.iter_mut().enumerate() {
        *o = buf[i % len] ^ buf[(i + 1) % len];
    }
}

impl ParamProvider for LegacyArgon2 {
    type Params = LegacyArgon2Params;

    fn with_params(params: Self::Params) -> Self {
        Self { params }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn set_params(&mut self, params: Self::Params) {
        self.params = params;
    }
}

impl KeyDerivationFunction for LegacyArgon2 {
    type Algorithm = LegacyArgon2Algorithm;

    fn new() -> Self {
        Self::default()
    }

    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Self::hash(password, salt, &self.params)
    }
}
