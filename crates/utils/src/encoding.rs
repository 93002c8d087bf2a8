//! Hex and Base64 text encodings of raw bytes
//!
//! Every function rejects empty input, matching the stored-record helpers
//! that never produce an empty digest or salt.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// Lowercase hex encoding
pub fn hex_encode(data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Err(Error::empty("data"));
    }
    Ok(hex::encode(data))
}

/// Decode hex text (either case)
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(Error::empty("hex string"));
    }
    Ok(hex::decode(text)?)
}

/// Hex-encode the UTF-8 bytes of `text`
pub fn hex_encode_str(text: &str) -> Result<String> {
    hex_encode(text.as_bytes())
}

/// Decode hex text into a UTF-8 string
pub fn hex_decode_to_string(text: &str) -> Result<String> {
    Ok(String::from_utf8(hex_decode(text)?)?)
}

/// Standard padded Base64 encoding
pub fn base64_encode(data: &[u8]) -> Result<String> {
    if data.is_empty() {
        return Err(Error::empty("data"));
    }
    Ok(STANDARD.encode(data))
}

/// Decode standard padded Base64
pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    if text.is_empty() {
        return Err(Error::empty("base64 string"));
    }
    Ok(STANDARD.decode(text)?)
}

/// Base64-encode the UTF-8 bytes of `text`
pub fn base64_encode_str(text: &str) -> Result<String> {
    base64_encode(text.as_bytes())
}

/// Decode Base64 text into a UTF-8 string
pub fn base64_decode_to_string(text: &str) -> Result<String> {
    Ok(String::from_utf8(base64_decode(text)?)?)
}
