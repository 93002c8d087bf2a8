//! Extendable Output Functions (XOF)
//!
//! An XOF produces output of caller-chosen length from a single absorbed
//! message. Requests are bounded per call by `MAX_XOF_OUTPUT`.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use shanext_params::utils::hash::MAX_XOF_OUTPUT;

pub mod shake;

pub use shake::ShakeXof128;

/// Trait for extendable output functions
pub trait ExtendableOutputFunction {
    /// Creates a new instance of the XOF
    fn new() -> Self;

    /// Updates the XOF state with new data
    fn update(&mut self, data: &[u8]) -> Result<()>;

    /// Finalizes the XOF state for output
    fn finalize(&mut self) -> Result<()>;

    /// Squeezes output bytes into the provided buffer
    fn squeeze(&mut self, output: &mut [u8]) -> Result<()>;

    /// Squeezes the specified number of output bytes into a new vector
    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>>;

    /// Resets the XOF state
    fn reset(&mut self) -> Result<()>;

    /// Returns the security level in bits
    fn security_level() -> usize;

    /// Convenience method to generate output in a single call
    fn generate(data: &[u8], len: usize) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        validate::parameter(
            len > 0,
            "output_length",
            "XOF output length must be greater than 0",
        )?;

        let mut xof = Self::new();
        xof.update(data)?;
        xof.squeeze_into_vec(len)
    }
}

/// Trait for XOF algorithms with compile-time guarantees
pub trait XofAlgorithm {
    /// Security level in bits
    const SECURITY_LEVEL: usize;

    /// Minimum output size in bytes
    const MIN_OUTPUT_SIZE: usize;

    /// Maximum output size per request in bytes (None for unlimited)
    const MAX_OUTPUT_SIZE: Option<usize>;

    /// Algorithm identifier
    const ALGORITHM_ID: &'static str;

    /// Algorithm name
    fn name() -> &'static str {
        Self::ALGORITHM_ID
    }

    /// Validate output length
    fn validate_output_length(len: usize) -> Result<()> {
        validate::parameter(
            len >= Self::MIN_OUTPUT_SIZE,
            "output_length",
            "Output length below minimum size",
        )?;

        if let Some(max) = Self::MAX_OUTPUT_SIZE {
            validate::max_length("XOF output", len, max)?;
        }

        Ok(())
    }
}

/// Type-level constants for SHAKE128
pub enum Shake128Algorithm {}

impl XofAlgorithm for Shake128Algorithm {
    const SECURITY_LEVEL: usize = 128;
    const MIN_OUTPUT_SIZE: usize = 1;
    const MAX_OUTPUT_SIZE: Option<usize> = Some(MAX_XOF_OUTPUT);
    const ALGORITHM_ID: &'static str = "SHAKE128";
}

impl Error {
    /// Create an XOF squeezing error
    pub(crate) fn xof_squeezing() -> Self {
        Error::Processing {
            operation: "XOF",
            details: "Cannot update after squeezing has begun",
        }
    }
}
