//! Parameter groups

pub mod hash;
pub mod kdf;
