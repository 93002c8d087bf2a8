//! Password-based key derivation
//!
//! PBKDF2 (RFC 8018) over any HMAC in this crate, scrypt (RFC 7914), and
//! the legacy XOR-chain password hash that older stored records were
//! produced with.
//!
//! ```
//! use shanext_algorithms::kdf::{scrypt, Pbkdf2};
//! use shanext_algorithms::hash::Sha256;
//!
//! let dk = Pbkdf2::<Sha256>::pbkdf2(b"password", b"salt", 1, 32).unwrap();
//! assert_eq!(dk.len(), 32);
//!
//! let key = scrypt(b"", b"", 16, 1, 1, 64).unwrap();
//! assert_eq!(&key[..4], &[0x77, 0xd6, 0x57, 0x62]);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::Result;

pub mod legacy_argon2;
pub mod pbkdf2;
pub mod scrypt;

pub use legacy_argon2::{LegacyArgon2, LegacyArgon2Params};
pub use pbkdf2::{Pbkdf2, Pbkdf2Params};
pub use scrypt::{scrypt, Scrypt, ScryptParams};

/// Compile-time description of a KDF
pub trait KdfAlgorithm {
    /// Recommended minimum salt size in bytes
    const MIN_SALT_SIZE: usize;

    /// Default output size in bytes
    const DEFAULT_OUTPUT_SIZE: usize;

    /// Static algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Returns the KDF algorithm name
    fn name() -> String {
        Self::ALGORITHM_ID.to_string()
    }
}

/// Trait for algorithms with configurable parameters
pub trait ParamProvider {
    /// The parameter type associated with this algorithm
    type Params: Clone;

    /// Creates a new instance with the specified parameters
    fn with_params(params: Self::Params) -> Self;

    /// Returns the current parameters
    fn params(&self) -> &Self::Params;

    /// Updates the parameters
    fn set_params(&mut self, params: Self::Params);
}

/// Common trait for the key derivation functions
pub trait KeyDerivationFunction: ParamProvider {
    /// The algorithm this KDF implements
    type Algorithm: KdfAlgorithm;

    /// Creates a new instance with default parameters
    fn new() -> Self;

    /// Derive key material from `password` and `salt` using the stored
    /// parameters
    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}
