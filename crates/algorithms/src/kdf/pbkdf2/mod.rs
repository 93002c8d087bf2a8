//! Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! This module implements PBKDF2 as specified in RFC 8018 with HMAC over a
//! configurable hash function as the pseudorandom function.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::error::{validate, Error, Result};
use crate::hash::HashFunction;
use crate::kdf::{KdfAlgorithm, KeyDerivationFunction, ParamProvider};
use crate::mac::hmac::Hmac;
use shanext_params::utils::kdf::{PBKDF2_DEFAULT_OUTPUT, PBKDF2_MIN_SALT_SIZE};
use zeroize::Zeroizing;

/// Type-level constants for PBKDF2 algorithm
pub enum Pbkdf2Algorithm<H: HashFunction> {
    /// Phantom field for the hash function
    _Hash(PhantomData<H>),
}

impl<H: HashFunction> KdfAlgorithm for Pbkdf2Algorithm<H> {
    const MIN_SALT_SIZE: usize = PBKDF2_MIN_SALT_SIZE;
    const DEFAULT_OUTPUT_SIZE: usize = PBKDF2_DEFAULT_OUTPUT;
    const ALGORITHM_ID: &'static str = "PBKDF2";

    fn name() -> String {
        format!("{}-{}", Self::ALGORITHM_ID, H::name())
    }
}

/// Parameters for PBKDF2
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pbkdf2Params {
    /// Number of iterations
    pub iterations: u32,

    /// Length of derived key in bytes
    pub key_length: usize,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            iterations: 600_000,
            key_length: PBKDF2_DEFAULT_OUTPUT,
        }
    }
}

/// PBKDF2 with HMAC-`H` as the PRF
#[derive(Clone)]
pub struct Pbkdf2<H: HashFunction + Clone> {
    _hash_type: PhantomData<H>,
    params: Pbkdf2Params,
}

impl<H: HashFunction + Clone> Pbkdf2<H> {
    /// Derive `key_length` bytes from `password` and `salt`
    ///
    /// Implements RFC 8018 section 5.2: `T_i = F(P, S, c, i)` for each
    /// output block, concatenated and truncated to `key_length`.
    pub fn pbkdf2(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::parameter(
            iterations > 0,
            "iterations",
            "PBKDF2 iteration count must be > 0",
        )?;

        validate::parameter(
            key_length > 0,
            "key_length",
            "PBKDF2 output length must be > 0",
        )?;

        let hash_len = H::output_size();
        let block_count = key_length.div_ceil(hash_len);

        // RFC 8018: dkLen must not exceed (2^32 - 1) * hLen
        if block_count as u64 > u32::MAX as u64 {
            return Err(Error::Length {
                context: "PBKDF2 output length",
                expected: (u32::MAX as usize).saturating_mul(hash_len),
                actual: key_length,
            });
        }

        // Keyed once; each PRF call starts from a clone of this state.
        let prf = Hmac::<H>::new(password)?;

        let mut result = Zeroizing::new(Vec::with_capacity(key_length));
        for block_index in 1..=block_count as u32 {
            let block = Self::pbkdf2_f(&prf, salt, iterations, block_index)?;
            let remaining = key_length - result.len();
            result.extend_from_slice(&block[..remaining.min(hash_len)]);
        }

        Ok(result)
    }

    /// F(P, S, c, i) = U_1 ^ U_2 ^ ... ^ U_c
    ///
    /// where U_1 = PRF(P, S || INT_32_BE(i)) and U_j = PRF(P, U_{j-1})
    fn pbkdf2_f(
        prf: &Hmac<H>,
        salt: &[u8],
        iterations: u32,
        block_index: u32,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let mut mac = prf.clone();
        mac.update(salt)?;
        mac.update(&block_index.to_be_bytes())?;
        let mut prev = Zeroizing::new(mac.finalize()?);

        let mut output = prev.clone();

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(&prev)?;
            prev = Zeroizing::new(mac.finalize()?);

            for (o, p) in output.iter_mut().zip(prev.iter()) {
                *o ^= p;
            }
        }

        Ok(output)
    }
}

impl<H: HashFunction + Clone> ParamProvider for Pbkdf2<H> {
    type Params = Pbkdf2Params;

    fn with_params(params: Self::Params) -> Self {
        Self {
            _hash_type: PhantomData,
            params,
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn set_params(&mut self, params: Self::Params) {
        self.params = params;
    }
}

impl<H: HashFunction + Clone> KeyDerivationFunction for Pbkdf2<H> {
    type Algorithm = Pbkdf2Algorithm<H>;

    fn new() -> Self {
        Self::with_params(Pbkdf2Params::default())
    }

    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        tracing::debug!(
            algorithm = %Pbkdf2Algorithm::<H>::name(),
            iterations = self.params.iterations,
            key_length = self.params.key_length,
            "pbkdf2 derive"
        );
        Self::pbkdf2(
            password,
            salt,
            self.params.iterations,
            self.params.key_length,
        )
    }
}
