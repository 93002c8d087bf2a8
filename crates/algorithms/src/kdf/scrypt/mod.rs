//! scrypt memory-hard key derivation (RFC 7914)
//!
//! PBKDF2-HMAC-SHA256 expands the password into `p` lanes of `128 * r`
//! bytes, each lane is run through ROMix over an `N`-entry table, and a
//! second PBKDF2 pass over the mixed lanes yields the derived key.

use alloc::vec::Vec;

use crate::error::{validate, Error, Result};
use crate::hash::Sha256;
use crate::kdf::pbkdf2::Pbkdf2;
use crate::kdf::{KdfAlgorithm, KeyDerivationFunction, ParamProvider};
use byteorder::{ByteOrder, LittleEndian};
use shanext_params::utils::kdf::{
    SALSA_BLOCK_SIZE, SCRYPT_DEFAULT_N, SCRYPT_DEFAULT_OUTPUT, SCRYPT_DEFAULT_P,
    SCRYPT_DEFAULT_R, SCRYPT_SALT_SIZE,
};
use zeroize::{Zeroize, Zeroizing};

/// Words in one Salsa20/8 block
const SALSA_WORDS: usize = SALSA_BLOCK_SIZE / 4;

/// Type-level constants for scrypt
pub enum ScryptAlgorithm {}

impl KdfAlgorithm for ScryptAlgorithm {
    const MIN_SALT_SIZE: usize = SCRYPT_SALT_SIZE;
    const DEFAULT_OUTPUT_SIZE: usize = SCRYPT_DEFAULT_OUTPUT;
    const ALGORITHM_ID: &'static str = "scrypt";
}

/// scrypt cost parameters
///
/// Deserialized values pass through [`ScryptParams::new`], so a stored
/// parameter set is held to the same bounds as one built in code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawScryptParams"))]
pub struct ScryptParams {
    log_n: u8,
    r: u32,
    p: u32,
    output_len: usize,
}

/// Unchecked wire form of [`ScryptParams`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawScryptParams {
    log_n: u8,
    r: u32,
    p: u32,
    output_len: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawScryptParams> for ScryptParams {
    type Error = Error;

    fn try_from(raw: RawScryptParams) -> Result<Self> {
        validate::parameter(
            u32::from(raw.log_n) < u32::BITS,
            "log_n",
            "log2(N) must be below 32",
        )?;
        Self::new(1u32 << raw.log_n, raw.r, raw.p, raw.output_len)
    }
}

impl ScryptParams {
    /// Validate and build a parameter set
    ///
    /// `n` must be a power of two greater than 1. `n * 128 * r` and
    /// `r * 128 * p` must each stay below 2^31, and `p` is bounded by
    /// RFC 7914's `p <= (2^32 - 1) * 32 / (128 * r)`.
    pub fn new(n: u32, r: u32, p: u32, output_len: usize) -> Result<Self> {
        validate::parameter(n > 1, "n", "cost parameter N must be greater than 1")?;
        validate::parameter(
            n.is_power_of_two(),
            "n",
            "cost parameter N must be a power of two",
        )?;
        validate::parameter(r >= 1, "r", "block size r must be at least 1")?;
        validate::parameter(p >= 1, "p", "parallelism p must be at least 1")?;
        validate::parameter(output_len >= 1, "output_len", "output length must be > 0")?;

        let ceiling = i32::MAX as u32 / 128;
        validate::parameter(n <= ceiling / r, "n", "cost parameter N is too large")?;
        validate::parameter(r <= ceiling / p, "r", "block size r is too large")?;

        let max_p = (u32::MAX as u64 * 32) / (128 * r as u64);
        validate::parameter(p as u64 <= max_p, "p", "parallelism p is too large")?;

        Ok(Self {
            log_n: n.trailing_zeros() as u8,
            r,
            p,
            output_len,
        })
    }

    /// Cost parameter `N`
    pub fn n(&self) -> u32 {
        1 << self.log_n
    }

    /// `log2(N)`
    pub fn log_n(&self) -> u8 {
        self.log_n
    }

    /// Block size factor `r`
    pub fn r(&self) -> u32 {
        self.r
    }

    /// Parallelisation factor `p`
    pub fn p(&self) -> u32 {
        self.p
    }

    /// Derived key length in bytes
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Bytes of the ROMix table `V`: `128 * r * N`
    pub fn memory_bytes(&self) -> usize {
        128 * self.r as usize * self.n() as usize
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        Self {
            log_n: SCRYPT_DEFAULT_N.trailing_zeros() as u8,
            r: SCRYPT_DEFAULT_R,
            p: SCRYPT_DEFAULT_P,
            output_len: SCRYPT_DEFAULT_OUTPUT,
        }
    }
}

/// scrypt key derivation function
#[derive(Clone, Debug, Default)]
pub struct Scrypt {
    params: ScryptParams,
}

impl Scrypt {
    /// Derive `params.output_len()` bytes from `password` and `salt`
    pub fn derive(
        password: &[u8],
        salt: &[u8],
        params: &ScryptParams,
    ) -> Result<Zeroizing<Vec<u8>>> {
        let r = params.r as usize;
        let p = params.p as usize;
        let n = params.n() as usize;
        let lane_bytes = 128 * r;
        let lane_words = lane_bytes / 4;

        tracing::debug!(
            n,
            r,
            p,
            output_len = params.output_len,
            salt_len = salt.len(),
            "scrypt derive"
        );

        // Allocate the table before any hashing so an oversized N fails fast.
        let mut v = try_alloc_words(lane_words * n, params.memory_bytes())?;
        let mut x = Zeroizing::new(alloc::vec![0u32; lane_words]);
        let mut y = Zeroizing::new(alloc::vec![0u32; lane_words]);

        let mut b = Pbkdf2::<Sha256>::pbkdf2(password, salt, 1, p * lane_bytes)?;

        for (lane, chunk) in b.chunks_mut(lane_bytes).enumerate() {
            tracing::trace!(lane, "scrypt smix");
            LittleEndian::read_u32_into(chunk, &mut x[..]);
            smix(&mut x[..], &mut v[..], &mut y[..], n, r);
            LittleEndian::write_u32_into(&x[..], chunk);
        }

        Pbkdf2::<Sha256>::pbkdf2(password, &b, 1, params.output_len)
    }
}

/// Derive a key with scrypt, validating the raw cost parameters first
pub fn scrypt(
    password: &[u8],
    salt: &[u8],
    n: u32,
    r: u32,
    p: u32,
    output_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    let params = ScryptParams::new(n, r, p, output_len)?;
    Scrypt::derive(password, salt, &params)
}

impl ParamProvider for Scrypt {
    type Params = ScryptParams;

    fn with_params(params: Self::Params) -> Self {
        Self { params }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn set_params(&mut self, params: Self::Params) {
        self.params = params;
    }
}

impl KeyDerivationFunction for Scrypt {
    type Algorithm = ScryptAlgorithm;

    fn new() -> Self {
        Self::default()
    }

    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        Self::derive(password, salt, &self.params)
    }
}

fn try_alloc_words(words: usize, bytes: usize) -> Result<Zeroizing<Vec<u32>>> {
    let mut v = Vec::new();
    v.try_reserve_exact(words)
        .map_err(|_| Error::ResourceExhaustion {
            context: "scrypt ROMix table",
            requested: bytes,
        })?;
    v.resize(words, 0u32);
    Ok(Zeroizing::new(v))
}

/// ROMix over one lane held as `32 * r` little-endian words in `x`
fn smix(x: &mut [u32], v: &mut [u32], y: &mut [u32], n: usize, r: usize) {
    let lane_words = x.len();

    for i in 0..n {
        v[i * lane_words..(i + 1) * lane_words].copy_from_slice(x);
        block_mix(x, y, r);
    }

    for _ in 0..n {
        let j = integerify(x, r) & (n - 1);
        let entry = &v[j * lane_words..(j + 1) * lane_words];
        for (a, b) in x.iter_mut().zip(entry) {
            *a ^= b;
        }
        block_mix(x, y, r);
    }
}

/// First word of the last 64-byte block, reduced by the caller mod `N`
fn integerify(x: &[u32], r: usize) -> usize {
    x[(2 * r - 1) * SALSA_WORDS] as usize
}

/// BlockMix with Salsa20/8, output written back into `b` with even blocks
/// first and odd blocks second
fn block_mix(b: &mut [u32], y: &mut [u32], r: usize) {
    let mut t = [0u32; SALSA_WORDS];
    t.copy_from_slice(&b[(2 * r - 1) * SALSA_WORDS..]);

    for i in 0..2 * r {
        for (tw, bw) in t.iter_mut().zip(&b[i * SALSA_WORDS..(i + 1) * SALSA_WORDS]) {
            *tw ^= bw;
        }
        salsa20_8(&mut t);

        let dst = if i % 2 == 0 { i / 2 } else { r + i / 2 };
        y[dst * SALSA_WORDS..(dst + 1) * SALSA_WORDS].copy_from_slice(&t);
    }

    b.copy_from_slice(y);
    t.zeroize();
}

/// Salsa20/8 core: four double rounds, then feed-forward
fn salsa20_8(b: &mut [u32; SALSA_WORDS]) {
    let mut x = *b;

    for _ in 0..4 {
        // columns
        x[4] ^= x[0].wrapping_add(x[12]).rotate_left(7);
        x[8] ^= x[4].wrapping_add(x[0]).rotate_left(9);
        x[12] ^= x[8].wrapping_add(x[4]).rotate_left(13);
        x[0] ^= x[12].wrapping_add(x[8]).rotate_left(18);

        x[9] ^= x[5].wrapping_add(x[1]).rotate_left(7);
        x[13] ^= x[9].wrapping_add(x[5]).rotate_left(9);
        x[1] ^= x[13].wrapping_add(x[9]).rotate_left(13);
        x[5] ^= x[1].wrapping_add(x[13]).rotate_left(18);

        x[14] ^= x[10].wrapping_add(x[6]).rotate_left(7);
        x[2] ^= x[14].wrapping_add(x[10]).rotate_left(9);
        x[6] ^= x[2].wrapping_add(x[14]).rotate_left(13);
        x[10] ^= x[6].wrapping_add(x[2]).rotate_left(18);

        x[3] ^= x[15].wrapping_add(x[11]).rotate_left(7);
        x[7] ^= x[3].wrapping_add(x[15]).rotate_left(9);
        x[11] ^= x[7].wrapping_add(x[3]).rotate_left(13);
        x[15] ^= x[11].wrapping_add(x[7]).rotate_left(18);

        // rows
        x[1] ^= x[0].wrapping_add(x[3]).rotate_left(7);
        x[2] ^= x[1].wrapping_add(x[0]).rotate_left(9);
        x[3] ^= x[2].wrapping_add(x[1]).rotate_left(13);
        x[0] ^= x[3].wrapping_add(x[2]).rotate_left(18);

        x[6] ^= x[5].wrapping_add(x[4]).rotate_left(7);
        x[7] ^= x[6].wrapping_add(x[5]).rotate_left(9);
        x[4] ^= x[7].wrapping_add(x[6]).rotate_left(13);
        x[5] ^= x[4].wrapping_add(x[7]).rotate_left(18);

        x[11] ^= x[10].wrapping_add(x[9]).rotate_left(7);
        x[8] ^= x[11].wrapping_add(x[10]).rotate_left(9);
        x[9] ^= x[8].wrapping_add(x[11]).rotate_left(13);
        x[10] ^= x[9].wrapping_add(x[8]).rotate_left(18);

        x[12] ^= x[15].wrapping_add(x[14]).rotate_left(7);
        x[13] ^= x[12].wrapping_add(x[15]).rotate_left(9);
        x[14] ^= x[13].wrapping_add(x[12]).rotate_left(13);
        x[15] ^= x[14].wrapping_add(x[13]).rotate_left(18);
    }

    for (bw, xw) in b.iter_mut().zip(x.iter()) {
        *bw = bw.wrapping_add(*xw);
    }
    x.zeroize();
}
