//! Internal helpers for the shanext workspace
//!
//! Nothing in here is cryptographic on its own. `constant_time` holds the
//! comparison routines used when checking digests and MAC tags.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod constant_time;

pub use constant_time::{ct_eq, ct_str_eq};
