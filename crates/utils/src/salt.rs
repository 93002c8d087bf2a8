//! Random salts, carried as Base64 text in stored records

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use shanext_params::utils::kdf::DEFAULT_SALT_SIZE;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// A fresh 64-byte salt from the OS generator, Base64-encoded
pub fn new_salt() -> String {
    salt_from_rng(&mut OsRng, DEFAULT_SALT_SIZE)
}

/// A fresh salt of `len` random bytes, Base64-encoded
pub fn new_salt_with_len(len: usize) -> Result<String> {
    new_salt_from_rng(&mut OsRng, len)
}

/// `provided` unchanged when non-empty, otherwise a fresh salt
pub fn salt_or_new(provided: &str) -> String {
    if provided.is_empty() {
        new_salt()
    } else {
        provided.to_string()
    }
}

/// A salt of `len` bytes drawn from `rng`, Base64-encoded
pub fn new_salt_from_rng<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<String> {
    if len == 0 {
        return Err(Error::InvalidParameter(
            "salt length must be greater than 0".into(),
        ));
    }
    Ok(salt_from_rng(rng, len))
}

/// Base64 text form of raw salt bytes
pub fn encode_salt(salt: &[u8]) -> String {
    STANDARD.encode(salt)
}

fn salt_from_rng<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> String {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    rng.fill_bytes(&mut bytes);
    encode_salt(&bytes)
}
