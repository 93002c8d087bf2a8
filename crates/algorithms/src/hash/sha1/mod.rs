//! SHA-1 (FIPS 180-4)
//!
//! Kept for legacy interoperability. SHA-1 collisions are practical.

use crate::error::Result;
use crate::hash::md::{BlockBuffer, LengthEncoding, MdPadding};
use crate::hash::{HashAlgorithm, HashFunction};
use crate::types::Digest;
use byteorder::{BigEndian, ByteOrder};
use shanext_common::security::{barrier, ZeroizeGuard};
use shanext_params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};
use zeroize::Zeroize;

const PADDING: MdPadding = MdPadding::new(SHA1_BLOCK_SIZE, LengthEncoding::Be64);

const INIT_STATE: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

/// Marker type for SHA-1
pub enum Sha1Algorithm {}

impl HashAlgorithm for Sha1Algorithm {
    const OUTPUT_SIZE: usize = SHA1_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA1_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-1";
}

/// SHA-1 hasher state
#[derive(Clone, Zeroize)]
pub struct Sha1 {
    state: [u32; 5],
    buffer: BlockBuffer<SHA1_BLOCK_SIZE>,
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Sha1 {
    fn compress(state: &mut [u32; 5], block: &[u8; SHA1_BLOCK_SIZE]) {
        let mut schedule = [0u32; 80];
        let mut w = ZeroizeGuard::new(&mut schedule);
        BigEndian::read_u32_into(block, &mut w[..16]);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *state;

        for (i, &wi) in w.iter().enumerate() {
            let (f, k) = match i / 20 {
                0 => ((b & c) | (!b & d), K[0]),
                1 => (b ^ c ^ d, K[1]),
                2 => ((b & c) | (b & d) | (c & d), K[2]),
                _ => (b ^ c ^ d, K[3]),
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(k)
                .wrapping_add(wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
        barrier::compiler_fence_seq_cst();
    }
}

impl HashFunction for Sha1 {
    type Algorithm = Sha1Algorithm;
    type Output = Digest<SHA1_OUTPUT_SIZE>;

    fn new() -> Self {
        Sha1 {
            state: INIT_STATE,
            buffer: BlockBuffer::new(),
        }
    }

    fn update(&mut self, data: &[u8]) -> Result<&mut Self> {
        let state = &mut self.state;
        self.buffer.update(data, |block| Self::compress(state, block));
        Ok(self)
    }

    fn finalize(&mut self) -> Result<Self::Output> {
        let state = &mut self.state;
        self.buffer.finish(PADDING, |block| Self::compress(state, block));

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.state, &mut out);
        self.state = INIT_STATE;
        Ok(Digest::new(out))
    }
}
