//! From-scratch digest and key-derivation primitives
//!
//! Every algorithm here is implemented directly from its published
//! definition: the Merkle-Damgard digests (MD5, SHA-1, the SHA-2 family,
//! RIPEMD-160, Whirlpool), the Keccak sponge (SHA3-256, SHAKE128), HMAC,
//! PBKDF2, scrypt, and a legacy XOR-chain password hash kept for checking
//! old records. The [`registry`] module selects among them by name.
//!
//! ```
//! use shanext_algorithms::hash::{HashFunction, Sha256};
//!
//! let digest = Sha256::digest(b"abc").unwrap();
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! Hashers and the sponge hold working state that is wiped on drop.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{to_core_result, validate, Error, Result};

// Hash function implementations
pub mod hash;
pub use hash::{
    HashFunction, Md5, Ripemd160, Sha1, Sha224, Sha256, Sha384, Sha3_256, Sha512, Sha512_224,
    Sha512_256, Whirlpool,
};

// Keccak-f[1600] and the sponge shared by SHA-3 and SHAKE
pub mod sponge;
pub use sponge::{Sponge, SpongePhase};

// MAC implementations
pub mod mac;
pub use mac::Hmac;

// Type system
pub mod types;
pub use types::Digest;

// XOF implementations (if enabled)
#[cfg(feature = "xof")]
pub mod xof;
#[cfg(feature = "xof")]
pub use xof::{ExtendableOutputFunction, ShakeXof128};

// KDF implementations (if enabled)
#[cfg(feature = "kdf")]
pub mod kdf;
#[cfg(feature = "kdf")]
pub use kdf::{
    scrypt, KeyDerivationFunction, LegacyArgon2, LegacyArgon2Params, Pbkdf2, Scrypt,
    ScryptParams,
};

// Name-based dispatch needs every primitive
#[cfg(all(feature = "xof", feature = "kdf"))]
pub mod registry;
#[cfg(all(feature = "xof", feature = "kdf"))]
pub use registry::{compute_digest, Algorithm};

// Re-export security types from shanext-common
pub use shanext_common::security::{SecretBuffer, SecretVec, ZeroizeGuard};
