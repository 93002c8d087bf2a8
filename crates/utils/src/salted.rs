//! Hex digests, salted digests and the `"<hex>:<base64>"` record format

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use shanext_algorithms::registry::Algorithm;
use shanext_internal::ct_str_eq;

use crate::config::HashConfig;
use crate::error::{Error, Result};
use crate::salt::new_salt;

/// A stored salted digest: lowercase hex digest and the Base64 salt text
/// that was prepended to the input
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltedHash {
    /// Lowercase hex digest of `salt || input`
    pub digest_hex: String,
    /// Salt text exactly as it was prepended
    pub salt: String,
}

impl fmt::Display for SaltedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.digest_hex, self.salt)
    }
}

impl FromStr for SaltedHash {
    type Err = Error;

    fn from_str(record: &str) -> Result<Self> {
        let (digest_hex, salt) = record
            .split_once(':')
            .ok_or_else(|| Error::MalformedRecord("missing ':' separator".into()))?;

        if digest_hex.is_empty() || salt.is_empty() {
            return Err(Error::MalformedRecord("empty digest or salt".into()));
        }
        if salt.contains(':') {
            return Err(Error::MalformedRecord("more than one ':' separator".into()));
        }

        Ok(Self {
            digest_hex: digest_hex.to_string(),
            salt: salt.to_string(),
        })
    }
}

/// Text-oriented hashing over a selected [`Algorithm`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltedHasher {
    algorithm: Algorithm,
}

impl Default for SaltedHasher {
    fn default() -> Self {
        Self::new(Algorithm::Sha256)
    }
}

impl SaltedHasher {
    /// Hash with `algorithm`
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Hash with the algorithm named by `config`
    pub fn from_config(config: &HashConfig) -> Result<Self> {
        Ok(Self::new(config.algorithm()?))
    }

    /// The selected algorithm
    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    /// Lowercase hex digest of `input`; empty input is rejected
    pub fn hash_hex(&self, input: &str) -> Result<String> {
        self.hash_bytes_hex(input.as_bytes())
    }

    /// Lowercase hex digest of raw bytes; empty input is rejected
    pub fn hash_bytes_hex(&self, input: &[u8]) -> Result<String> {
        if input.is_empty() {
            return Err(Error::empty("input"));
        }
        Ok(hex::encode(self.algorithm.compute(input)?))
    }

    /// Hex digest of `salt || input`
    pub fn hash_with_salt(&self, input: &str, salt: &str) -> Result<String> {
        if input.is_empty() || salt.is_empty() {
            return Err(Error::InvalidParameter(
                "input and salt cannot be empty".into(),
            ));
        }
        self.hash_hex(&format!("{}{}", salt, input))
    }

    /// Salt `input` with a fresh 64-byte salt and return the record
    pub fn generate_salted_hash(&self, input: &str) -> Result<SaltedHash> {
        let salt = new_salt();
        let digest_hex = self.hash_with_salt(input, &salt)?;
        Ok(SaltedHash { digest_hex, salt })
    }

    /// Start from `salt || input` and replace it with its own hex digest
    /// `iterations` times
    pub fn hash_with_iterations(&self, input: &str, salt: &str, iterations: u32) -> Result<String> {
        if input.is_empty() || salt.is_empty() {
            return Err(Error::InvalidParameter(
                "input and salt cannot be empty".into(),
            ));
        }
        if iterations == 0 {
            return Err(Error::InvalidParameter(
                "iterations must be greater than 0".into(),
            ));
        }

        let mut current = format!("{}{}", salt, input);
        for _ in 0..iterations {
            current = self.hash_hex(&current)?;
        }
        Ok(current)
    }

    /// Hex digest of everything `reader` yields
    ///
    /// The bytes are hashed as read; no text decoding is applied.
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> Result<String> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        tracing::debug!(len = data.len(), algorithm = %self.algorithm, "hash stream");
        self.hash_bytes_hex(&data)
    }

    /// Hex digest of the file at `path`
    pub fn hash_file(&self, path: impl AsRef<Path>) -> Result<String> {
        self.hash_reader(File::open(path)?)
    }

    /// Hash `input` and compare against `expected_hex` in constant time
    pub fn verify(&self, input: &str, expected_hex: &str) -> Result<bool> {
        let actual = self.hash_hex(input)?;
        Ok(ct_str_eq(&actual, expected_hex))
    }

    /// Hash `salt || input` and compare against `expected_hex` in constant
    /// time
    pub fn verify_salted(&self, input: &str, salt: &str, expected_hex: &str) -> Result<bool> {
        let actual = self.hash_with_salt(input, salt)?;
        Ok(ct_str_eq(&actual, expected_hex))
    }

    /// Check `input` against a stored record
    pub fn verify_record(&self, input: &str, record: &SaltedHash) -> Result<bool> {
        self.verify_salted(input, &record.salt, &record.digest_hex)
    }
}
