//! Public API traits and types for the shanext digest suite
//!
//! This crate holds the error type every other shanext crate converts into,
//! and the object-safe [`DigestPrimitive`] trait the dispatch registry is
//! exposed through.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

pub mod error;
pub mod traits;

pub use error::{Error, Result};
pub use traits::DigestPrimitive;
