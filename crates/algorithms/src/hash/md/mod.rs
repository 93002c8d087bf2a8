//! Merkle–Damgård padding and block buffering shared by MD5, SHA-1,
//! SHA-2, RIPEMD-160 and Whirlpool
//!
//! A message of `L` bytes is extended with a single `0x80` byte, zero bytes,
//! and a length field carrying the original bit length, so that the padded
//! length is the smallest multiple of the block size that is at least
//! `L + 1 + field_len`.

use alloc::vec;
use alloc::vec::Vec;
use zeroize::Zeroize;

/// Width and byte order of the trailing bit-length field
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LengthEncoding {
    /// 64-bit little-endian (MD5, RIPEMD-160)
    Le64,
    /// 64-bit big-endian (SHA-1, SHA-224, SHA-256)
    Be64,
    /// 128-bit big-endian (SHA-384, SHA-512 and truncations)
    Be128,
    /// 256-bit big-endian (Whirlpool)
    Be256,
}

impl LengthEncoding {
    /// Size of the length field in bytes
    pub const fn field_len(self) -> usize {
        match self {
            LengthEncoding::Le64 | LengthEncoding::Be64 => 8,
            LengthEncoding::Be128 => 16,
            LengthEncoding::Be256 => 32,
        }
    }

    fn write(self, bit_len: u128, out: &mut [u8]) {
        match self {
            LengthEncoding::Le64 => out.copy_from_slice(&(bit_len as u64).to_le_bytes()),
            LengthEncoding::Be64 => out.copy_from_slice(&(bit_len as u64).to_be_bytes()),
            LengthEncoding::Be128 => out.copy_from_slice(&bit_len.to_be_bytes()),
            LengthEncoding::Be256 => {
                out[..16].fill(0);
                out[16..].copy_from_slice(&bit_len.to_be_bytes());
            }
        }
    }
}

/// Padding rule of one Merkle–Damgård algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MdPadding {
    /// Block size in bytes
    pub block_size: usize,
    /// Length field layout
    pub length_field: LengthEncoding,
}

impl MdPadding {
    /// Describe a padding rule
    pub const fn new(block_size: usize, length_field: LengthEncoding) -> Self {
        Self {
            block_size,
            length_field,
        }
    }

    /// Total length after padding a message of `message_len` bytes
    pub fn padded_len(&self, message_len: u64) -> u64 {
        let block = self.block_size as u64;
        let min = message_len + 1 + self.length_field.field_len() as u64;
        min.div_ceil(block) * block
    }

    /// Bytes appended to a message of `message_len` bytes
    pub fn padding_for(&self, message_len: u64) -> Vec<u8> {
        let pad_len = (self.padded_len(message_len) - message_len) as usize;
        let mut pad = vec![0u8; pad_len];
        pad[0] = 0x80;
        let field = self.length_field.field_len();
        let bit_len = (message_len as u128) << 3;
        self.length_field.write(bit_len, &mut pad[pad_len - field..]);
        pad
    }
}

/// Partial-block buffer and byte counter of a running hasher
#[derive(Clone, Zeroize)]
pub(crate) struct BlockBuffer<const B: usize> {
    block: [u8; B],
    filled: usize,
    total: u64,
}

impl<const B: usize> BlockBuffer<B> {
    pub(crate) const fn new() -> Self {
        Self {
            block: [0u8; B],
            filled: 0,
            total: 0,
        }
    }

    /// Buffer `input`, handing every completed block to `compress`
    pub(crate) fn update(&mut self, input: &[u8], compress: impl FnMut(&[u8; B])) {
        self.total = self.total.wrapping_add(input.len() as u64);
        self.absorb(input, compress);
    }

    /// Append the padding for everything seen so far, flush the final
    /// block(s) and clear the buffer
    pub(crate) fn finish(&mut self, padding: MdPadding, mut compress: impl FnMut(&[u8; B])) {
        let mut pad = padding.padding_for(self.total);
        self.absorb(&pad, &mut compress);
        debug_assert_eq!(self.filled, 0);
        pad.zeroize();
        self.zeroize();
    }

    fn absorb(&mut self, mut input: &[u8], mut compress: impl FnMut(&[u8; B])) {
        if self.filled > 0 {
            let take = core::cmp::min(input.len(), B - self.filled);
            self.block[self.filled..self.filled + take].copy_from_slice(&input[..take]);
            self.filled += take;
            input = &input[take..];
            if self.filled < B {
                return;
            }
            compress(&self.block);
            self.filled = 0;
        }

        let mut chunks = input.chunks_exact(B);
        for chunk in &mut chunks {
            let mut block = [0u8; B];
            block.copy_from_slice(chunk);
            compress(&block);
        }

        let rest = chunks.remainder();
        self.block[..rest.len()].copy_from_slice(rest);
        self.filled = rest.len();
    }
}
