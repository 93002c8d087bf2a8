//! Shared secure-memory types for the shanext workspace
//!
//! Hash states, HMAC pads, PBKDF2 blocks and the scratch memory of the
//! password hashes all hold material derived from secrets. The containers in
//! this crate wipe themselves when dropped so callers do not have to.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use security::SecretVec;

// Re-export memory barrier utilities
pub use security::barrier;
