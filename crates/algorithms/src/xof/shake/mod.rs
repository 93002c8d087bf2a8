//! SHAKE128 extendable output function (FIPS 202)

use alloc::vec;
use alloc::vec::Vec;

use super::{ExtendableOutputFunction, Shake128Algorithm, XofAlgorithm};
use crate::error::{Error, Result};
use crate::sponge::{Sponge, SpongePhase};
use shanext_params::utils::hash::{SHAKE128_RATE, SHAKE_SUFFIX};

/// SHAKE128 over a Keccak sponge with a 168-byte rate
#[derive(Clone)]
pub struct ShakeXof128 {
    sponge: Sponge,
}

impl ExtendableOutputFunction for ShakeXof128 {
    fn new() -> Self {
        Self {
            sponge: Sponge::with_fixed_params(SHAKE128_RATE, SHAKE_SUFFIX),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.sponge.phase() == SpongePhase::Squeezing {
            return Err(Error::xof_squeezing());
        }
        self.sponge.absorb(data)
    }

    fn finalize(&mut self) -> Result<()> {
        if self.sponge.phase() == SpongePhase::Absorbing {
            self.sponge.squeeze(&mut [])?;
        }
        Ok(())
    }

    fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        self.sponge.squeeze(output)
    }

    fn squeeze_into_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        Shake128Algorithm::validate_output_length(len)?;
        let mut out = vec![0u8; len];
        self.sponge.squeeze(&mut out)?;
        Ok(out)
    }

    fn reset(&mut self) -> Result<()> {
        self.sponge.reset();
        Ok(())
    }

    fn security_level() -> usize {
        Shake128Algorithm::SECURITY_LEVEL
    }
}
