//! Constant values for the shanext workspace
//!
//! Block sizes, output sizes, sponge rates and key-derivation defaults live
//! here so that the primitives, the registry and the helper crates agree on
//! them without depending on one another.

#![no_std]
#![deny(missing_docs)]

pub mod utils;
