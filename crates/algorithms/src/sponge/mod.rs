//! Keccak-f[1600] permutation and the sponge construction (FIPS 202)
//!
//! A [`Sponge`] starts in [`SpongePhase::Absorbing`]. The first call to
//! [`Sponge::squeeze`] applies the pad10*1 rule with the instance's domain
//! suffix and moves it to [`SpongePhase::Squeezing`] for good; absorbing
//! after that point is an error. Squeezing is resumable: output may be
//! drawn in any number of calls and is identical to one long request.

use core::sync::atomic::{compiler_fence, Ordering};
use zeroize::Zeroize;

use crate::error::{validate, Error, Result};
use shanext_params::utils::hash::{KECCAK_STATE_BYTES, MAX_XOF_OUTPUT};

const KECCAK_ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state
pub const KECCAK_STATE_WORDS: usize = 25;

/// The 1600-bit permutation state, lane `x + 5y` at index `x + 5 * y`
pub type KeccakState = [u64; KECCAK_STATE_WORDS];

/// Keccak round constants.
const RC: [u64; KECCAK_ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808A,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808B,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008A,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000A,
    0x0000_0000_8000_808B,
    0x8000_0000_0000_008B,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800A,
    0x8000_0000_8000_000A,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Rotation offsets for the ρ step, in π visiting order.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// π-mapping indexes.
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Apply the 24-round Keccak-f[1600] permutation in place
pub fn keccak_f1600(state: &mut KeccakState) {
    for &rc in RC.iter() {
        // θ
        let mut c = [0u64; 5];
        for x in 0..5 {
            c[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                state[x + 5 * y] ^= d;
            }
        }
        // ρ + π
        let mut t = state[1];
        for i in 0..24 {
            let j = PI[i];
            let tmp = state[j];
            state[j] = t.rotate_left(RHO[i]);
            t = tmp;
        }
        // χ
        for y in 0..5 {
            let mut row = [0u64; 5];
            row.copy_from_slice(&state[5 * y..5 * y + 5]);
            for x in 0..5 {
                state[x + 5 * y] ^= (!row[(x + 1) % 5]) & row[(x + 2) % 5];
            }
        }
        // ι
        state[0] ^= rc;
    }
}

#[inline(always)]
fn get_byte_from_state(state: &KeccakState, pos: usize) -> u8 {
    let word = pos / 8;
    let shift = (pos % 8) * 8;
    ((state[word] >> shift) & 0xFF) as u8
}

#[inline(always)]
fn xor_byte_in_state(state: &mut KeccakState, pos: usize, val: u8) {
    let word = pos / 8;
    let shift = (pos % 8) * 8;
    state[word] ^= (val as u64) << shift;
    compiler_fence(Ordering::SeqCst);
}

/// Which half of the sponge lifecycle an instance is in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpongePhase {
    /// Input may still be absorbed
    Absorbing,
    /// Padding has been applied and output is being drawn
    Squeezing,
}

/// Keccak sponge over a 200-byte state with a byte-granular rate
#[derive(Clone)]
pub struct Sponge {
    state: KeccakState,
    rate: usize,
    suffix: u8,
    offset: usize,
    phase: SpongePhase,
}

impl Sponge {
    /// Create an empty sponge absorbing `rate` bytes per permutation and
    /// finishing with the domain-separation `suffix` (0x06 for SHA-3,
    /// 0x1F for SHAKE)
    pub fn new(rate: usize, suffix: u8) -> Result<Self> {
        validate::parameter(
            rate > 0 && rate < KECCAK_STATE_BYTES && rate % 8 == 0,
            "rate",
            "must be a non-zero multiple of 8 below 200",
        )?;
        validate::parameter(suffix != 0, "suffix", "must contain at least one bit")?;
        Ok(Self::with_fixed_params(rate, suffix))
    }

    // Rate and suffix are crate constants already known to be valid
    pub(crate) const fn with_fixed_params(rate: usize, suffix: u8) -> Self {
        Self {
            state: [0u64; KECCAK_STATE_WORDS],
            rate,
            suffix,
            offset: 0,
            phase: SpongePhase::Absorbing,
        }
    }

    /// Bytes absorbed or squeezed per permutation
    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> SpongePhase {
        self.phase
    }

    /// XOR `data` into the rate portion of the state
    pub fn absorb(&mut self, data: &[u8]) -> Result<()> {
        if self.phase == SpongePhase::Squeezing {
            return Err(Error::Processing {
                operation: "sponge absorb",
                details: "Cannot absorb after squeezing has begun",
            });
        }
        for &byte in data {
            xor_byte_in_state(&mut self.state, self.offset, byte);
            self.offset += 1;
            if self.offset == self.rate {
                keccak_f1600(&mut self.state);
                self.offset = 0;
            }
        }
        Ok(())
    }

    fn pad_and_switch(&mut self) {
        xor_byte_in_state(&mut self.state, self.offset, self.suffix);
        xor_byte_in_state(&mut self.state, self.rate - 1, 0x80);
        keccak_f1600(&mut self.state);
        self.offset = 0;
        self.phase = SpongePhase::Squeezing;
    }

    /// Fill `output` with the next bytes of the sponge's output stream,
    /// applying padding first if this is the first squeeze
    pub fn squeeze(&mut self, output: &mut [u8]) -> Result<()> {
        validate::max_length("sponge squeeze", output.len(), MAX_XOF_OUTPUT)?;
        if self.phase == SpongePhase::Absorbing {
            self.pad_and_switch();
        }
        for out in output.iter_mut() {
            if self.offset == self.rate {
                keccak_f1600(&mut self.state);
                self.offset = 0;
            }
            *out = get_byte_from_state(&self.state, self.offset);
            self.offset += 1;
        }
        Ok(())
    }

    /// Wipe the state and return to the absorbing phase, keeping rate and
    /// suffix
    pub fn reset(&mut self) {
        self.zeroize();
    }
}

impl Zeroize for Sponge {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.offset = 0;
        self.phase = SpongePhase::Absorbing;
    }
}

impl Drop for Sponge {
    fn drop(&mut self) {
        self.zeroize();
    }
}
