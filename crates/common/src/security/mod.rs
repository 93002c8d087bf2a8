//! Security primitives and memory safety utilities

pub mod barrier;
pub mod secret;

pub use secret::{SecretBuffer, ZeroizeGuard};

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
