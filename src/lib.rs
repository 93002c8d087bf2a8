//! # shanext
//!
//! From-scratch message digests and password-based key derivation with a
//! single name-based dispatch point.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! shanext = "0.4"
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the digests, sponge, HMAC and KDFs
//! - `utils` (default): salted records, encoders, configuration file
//! - `serde`: serialization for algorithm selectors and KDF parameters
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`shanext-algorithms`]: MD5, SHA-1, SHA-2, SHA3-256, SHAKE128,
//!   RIPEMD-160, Whirlpool, HMAC, PBKDF2, scrypt and the registry
//! - [`shanext-utils`]: text-level helpers over the registry
//! - [`shanext-api`], [`shanext-common`], [`shanext-internal`],
//!   [`shanext-params`]: shared traits, containers, helpers and constants
//!
//! ```
//! use shanext::prelude::*;
//!
//! let algorithm = Algorithm::from_name("SHA_256").unwrap();
//! let digest = algorithm.compute(b"abc").unwrap();
//! assert_eq!(digest.len(), 32);
//!
//! let key: shanext::zeroize::Zeroizing<Vec<u8>> =
//!     shanext::algorithms::scrypt(b"", b"", 16, 1, 1, 64).unwrap();
//! assert_eq!(key.len(), 64);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use shanext_api as api;
pub use shanext_common as common;
pub use shanext_internal as internal;
pub use shanext_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use shanext_algorithms as algorithms;

#[cfg(feature = "utils")]
pub use shanext_utils as utils;

pub use zeroize;

/// Common imports for shanext users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{DigestPrimitive, Error, Result};

    // Re-export security types
    pub use crate::common::{SecretBuffer, ZeroizeGuard};

    pub use crate::internal::{ct_eq, ct_str_eq};

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{
        hash::HashFunction,
        kdf::KeyDerivationFunction,
        registry::{compute_digest, Algorithm},
        xof::ExtendableOutputFunction,
        Hmac,
    };

    #[cfg(feature = "utils")]
    pub use crate::utils::{HashConfig, SaltedHash, SaltedHasher};
}
