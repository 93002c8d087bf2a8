//! Name-based dispatch over every primitive in the crate
//!
//! [`Algorithm`] is a closed set: adding a primitive means adding a variant,
//! and every `match` below is checked for exhaustiveness. Parameterised
//! variants (SHAKE128, scrypt, the legacy hash) carry their parameters so a
//! single value fully describes the computation.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::error::{to_core_result, Error, Result};
use crate::hash::{
    HashAlgorithm, HashFunction, Md5, Ripemd160, Sha1, Sha224, Sha256, Sha384, Sha3_256,
    Sha512, Sha512_224, Sha512_256, Whirlpool,
};
use crate::kdf::{LegacyArgon2, LegacyArgon2Params, Scrypt, ScryptParams};
use crate::xof::{ExtendableOutputFunction, Shake128Algorithm, ShakeXof128, XofAlgorithm};
use shanext_params::utils::hash::{SHAKE128_DEFAULT_OUTPUT, SHAKE128_RATE};

/// A selectable digest or derivation primitive
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// MD5
    Md5,
    /// SHA-1
    Sha1,
    /// SHA-224
    Sha224,
    /// SHA-256
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
    /// SHA3-256
    Sha3_256,
    /// SHAKE128 squeezed to `output_len` bytes
    Shake128 {
        /// Bytes to squeeze
        output_len: usize,
    },
    /// RIPEMD-160
    Ripemd160,
    /// Whirlpool
    Whirlpool,
    /// scrypt with the input as password
    Scrypt {
        /// Cost parameters and output length
        params: ScryptParams,
        /// Salt mixed into every derivation
        salt: Vec<u8>,
    },
    /// The legacy XOR-chain password hash with the input as password
    LegacyArgon2 {
        /// Cost parameters and output length
        params: LegacyArgon2Params,
        /// Salt mixed into every derivation
        salt: Vec<u8>,
    },
}

impl Algorithm {
    /// Look up an algorithm by selector name
    ///
    /// Accepts the underscore selectors used in configuration files
    /// (`SHA_256`, `SHA_512_224`, `SHA_3`, `RIPEMD_160`, `ARGON2`, ...) and
    /// the hyphenated standard spellings (`SHA-256`, `SHA3-256`,
    /// `SHA-512/224`), ignoring ASCII case. SHAKE128 gets a 32-byte output;
    /// scrypt and the legacy hash get default parameters and an empty salt.
    pub fn from_name(name: &str) -> Result<Self> {
        let key: String = name
            .trim()
            .chars()
            .map(|c| match c {
                '-' | '/' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();

        let algorithm = match key.as_str() {
            "MD5" => Algorithm::Md5,
            "SHA_1" | "SHA1" => Algorithm::Sha1,
            "SHA_224" | "SHA224" => Algorithm::Sha224,
            "SHA_256" | "SHA256" => Algorithm::Sha256,
            "SHA_384" | "SHA384" => Algorithm::Sha384,
            "SHA_512" | "SHA512" => Algorithm::Sha512,
            "SHA_512_224" | "SHA512_224" => Algorithm::Sha512_224,
            "SHA_512_256" | "SHA512_256" => Algorithm::Sha512_256,
            "SHA_3" | "SHA3" | "SHA3_256" => Algorithm::Sha3_256,
            "SHAKE128" | "SHAKE_128" => Algorithm::Shake128 {
                output_len: SHAKE128_DEFAULT_OUTPUT,
            },
            "RIPEMD_160" | "RIPEMD160" => Algorithm::Ripemd160,
            "WHIRLPOOL" => Algorithm::Whirlpool,
            "SCRYPT" => Algorithm::Scrypt {
                params: ScryptParams::default(),
                salt: Vec::new(),
            },
            "ARGON2" | "LEGACY_ARGON2" => Algorithm::LegacyArgon2 {
                params: LegacyArgon2Params::default(),
                salt: Vec::new(),
            },
            _ => return Err(Error::unknown_algorithm(name)),
        };

        Ok(algorithm)
    }

    /// SHAKE128 with a validated output length
    pub fn shake128(output_len: usize) -> Result<Self> {
        Shake128Algorithm::validate_output_length(output_len)?;
        Ok(Algorithm::Shake128 { output_len })
    }

    /// scrypt with the given parameters and salt
    pub fn scrypt(params: ScryptParams, salt: &[u8]) -> Self {
        Algorithm::Scrypt {
            params,
            salt: salt.to_vec(),
        }
    }

    /// The legacy hash with the given parameters and salt
    pub fn legacy_argon2(params: LegacyArgon2Params, salt: &[u8]) -> Self {
        Algorithm::LegacyArgon2 {
            params,
            salt: salt.to_vec(),
        }
    }

    /// Canonical display name
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Md5 => id::<Md5>(),
            Algorithm::Sha1 => id::<Sha1>(),
            Algorithm::Sha224 => id::<Sha224>(),
            Algorithm::Sha256 => id::<Sha256>(),
            Algorithm::Sha384 => id::<Sha384>(),
            Algorithm::Sha512 => id::<Sha512>(),
            Algorithm::Sha512_224 => id::<Sha512_224>(),
            Algorithm::Sha512_256 => id::<Sha512_256>(),
            Algorithm::Sha3_256 => id::<Sha3_256>(),
            Algorithm::Shake128 { .. } => Shake128Algorithm::ALGORITHM_ID,
            Algorithm::Ripemd160 => id::<Ripemd160>(),
            Algorithm::Whirlpool => id::<Whirlpool>(),
            Algorithm::Scrypt { .. } => "scrypt",
            Algorithm::LegacyArgon2 { .. } => "legacy-argon2",
        }
    }

    /// Number of bytes `compute` returns
    pub fn output_len(&self) -> usize {
        match self {
            Algorithm::Md5 => Md5::output_size(),
            Algorithm::Sha1 => Sha1::output_size(),
            Algorithm::Sha224 => Sha224::output_size(),
            Algorithm::Sha256 => Sha256::output_size(),
            Algorithm::Sha384 => Sha384::output_size(),
            Algorithm::Sha512 => Sha512::output_size(),
            Algorithm::Sha512_224 => Sha512_224::output_size(),
            Algorithm::Sha512_256 => Sha512_256::output_size(),
            Algorithm::Sha3_256 => Sha3_256::output_size(),
            Algorithm::Shake128 { output_len } => *output_len,
            Algorithm::Ripemd160 => Ripemd160::output_size(),
            Algorithm::Whirlpool => Whirlpool::output_size(),
            Algorithm::Scrypt { params, .. } => params.output_len(),
            Algorithm::LegacyArgon2 { params, .. } => params.output_len,
        }
    }

    /// Block size (sponge rate for Keccak), or `None` for the KDFs
    pub fn block_size(&self) -> Option<usize> {
        let size = match self {
            Algorithm::Md5 => Md5::block_size(),
            Algorithm::Sha1 => Sha1::block_size(),
            Algorithm::Sha224 => Sha224::block_size(),
            Algorithm::Sha256 => Sha256::block_size(),
            Algorithm::Sha384 => Sha384::block_size(),
            Algorithm::Sha512 => Sha512::block_size(),
            Algorithm::Sha512_224 => Sha512_224::block_size(),
            Algorithm::Sha512_256 => Sha512_256::block_size(),
            Algorithm::Sha3_256 => Sha3_256::block_size(),
            Algorithm::Shake128 { .. } => SHAKE128_RATE,
            Algorithm::Ripemd160 => Ripemd160::block_size(),
            Algorithm::Whirlpool => Whirlpool::block_size(),
            Algorithm::Scrypt { .. } | Algorithm::LegacyArgon2 { .. } => return None,
        };
        Some(size)
    }

    /// True only for SHAKE128
    pub fn is_extendable(&self) -> bool {
        matches!(self, Algorithm::Shake128 { .. })
    }

    /// Hash or derive over `input`
    ///
    /// For the KDF variants `input` is the password.
    pub fn compute(&self, input: &[u8]) -> Result<Vec<u8>> {
        tracing::debug!(
            algorithm = self.name(),
            input_len = input.len(),
            "compute digest"
        );

        match self {
            Algorithm::Md5 => digest_vec::<Md5>(input),
            Algorithm::Sha1 => digest_vec::<Sha1>(input),
            Algorithm::Sha224 => digest_vec::<Sha224>(input),
            Algorithm::Sha256 => digest_vec::<Sha256>(input),
            Algorithm::Sha384 => digest_vec::<Sha384>(input),
            Algorithm::Sha512 => digest_vec::<Sha512>(input),
            Algorithm::Sha512_224 => digest_vec::<Sha512_224>(input),
            Algorithm::Sha512_256 => digest_vec::<Sha512_256>(input),
            Algorithm::Sha3_256 => digest_vec::<Sha3_256>(input),
            Algorithm::Shake128 { output_len } => {
                Shake128Algorithm::validate_output_length(*output_len)?;
                ShakeXof128::generate(input, *output_len)
            }
            Algorithm::Ripemd160 => digest_vec::<Ripemd160>(input),
            Algorithm::Whirlpool => digest_vec::<Whirlpool>(input),
            Algorithm::Scrypt { params, salt } => {
                Ok(Scrypt::derive(input, salt, params)?.to_vec())
            }
            Algorithm::LegacyArgon2 { params, salt } => {
                Ok(LegacyArgon2::hash(input, salt, params)?.to_vec())
            }
        }
    }
}

fn id<H: HashFunction>() -> &'static str {
    <H::Algorithm as HashAlgorithm>::ALGORITHM_ID
}

fn digest_vec<H: HashFunction>(input: &[u8]) -> Result<Vec<u8>> {
    Ok(H::digest(input)?.as_ref().to_vec())
}

/// Compute `algorithm` over `input`
pub fn compute_digest(algorithm: &Algorithm, input: &[u8]) -> Result<Vec<u8>> {
    algorithm.compute(input)
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::from_name(s)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl shanext_api::DigestPrimitive for Algorithm {
    fn name(&self) -> &'static str {
        Algorithm::name(self)
    }

    fn output_len(&self) -> usize {
        Algorithm::output_len(self)
    }

    fn is_variable_length(&self) -> bool {
        matches!(
            self,
            Algorithm::Shake128 { .. } | Algorithm::Scrypt { .. } | Algorithm::LegacyArgon2 { .. }
        )
    }

    fn compute(&self, input: &[u8]) -> shanext_api::Result<Vec<u8>> {
        to_core_result(Algorithm::compute(self, input), Algorithm::name(self))
    }
}

#[cfg(test)]
mod tests;
