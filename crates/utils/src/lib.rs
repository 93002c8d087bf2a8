//! Text-level helpers over the shanext primitives
//!
//! Hex digests and salted `"<hex>:<base64>"` records ([`salted`]), random
//! salts ([`salt`]), hex and Base64 codecs ([`encoding`]), HMAC and PBKDF2
//! wrappers ([`keyed`]), and the JSON default-algorithm configuration
//! ([`config`]).
//!
//! ```
//! use shanext_utils::salted::SaltedHasher;
//!
//! let hasher = SaltedHasher::default();
//! let record = hasher.generate_salted_hash("correct horse").unwrap();
//! assert!(hasher.verify_record("correct horse", &record).unwrap());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod encoding;
pub mod error;
pub mod keyed;
pub mod salt;
pub mod salted;

pub use config::HashConfig;
pub use error::{Error, Result};
pub use salted::{SaltedHash, SaltedHasher};
