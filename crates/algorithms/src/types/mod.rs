//! Typed outputs of the digest primitives

pub mod digest;

pub use digest::Digest;
