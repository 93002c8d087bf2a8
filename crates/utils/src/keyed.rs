//! Text-facing HMAC and PBKDF2 helpers
//!
//! Keys, messages and passwords are taken as UTF-8 text. Tags are returned
//! as lowercase hex.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use shanext_algorithms::hash::{HashFunction, Sha256};
use shanext_algorithms::kdf::Pbkdf2;
use shanext_algorithms::mac::Hmac;
use shanext_internal::ct_str_eq;
use zeroize::Zeroizing;

use crate::error::Result;

/// HMAC over any hash in the suite, hex-encoded
pub fn hmac_hex<H: HashFunction + Clone>(key: &str, data: &str) -> Result<String> {
    let tag = Hmac::<H>::mac(key.as_bytes(), data.as_bytes())?;
    Ok(hex::encode(tag))
}

/// HMAC-SHA256 of `data` under `key`, hex-encoded
pub fn hmac_sha256_hex(key: &str, data: &str) -> Result<String> {
    hmac_hex::<Sha256>(key, data)
}

/// Recompute HMAC-SHA256 and compare with `expected_hex` in constant time
pub fn verify_hmac_sha256(key: &str, data: &str, expected_hex: &str) -> Result<bool> {
    let actual = hmac_sha256_hex(key, data)?;
    Ok(ct_str_eq(&actual, expected_hex))
}

/// PBKDF2-HMAC-SHA256 of `password`
pub fn pbkdf2_sha256(
    password: &str,
    salt: &[u8],
    iterations: u32,
    key_len: usize,
) -> Result<Zeroizing<Vec<u8>>> {
    Ok(Pbkdf2::<Sha256>::pbkdf2(
        password.as_bytes(),
        salt,
        iterations,
        key_len,
    )?)
}

/// Re-derive a key of `expected.len()` bytes and compare the Base64 forms
/// in constant time
pub fn verify_pbkdf2_sha256(
    password: &str,
    salt: &[u8],
    iterations: u32,
    expected: &[u8],
) -> Result<bool> {
    let derived = pbkdf2_sha256(password, salt, iterations, expected.len())?;
    let actual = Zeroizing::new(STANDARD.encode(&*derived));
    let expected = STANDARD.encode(expected);
    Ok(ct_str_eq(&actual, &expected))
}
