//! Structured error types for the known-answer engine

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("primitive failed: {0}")]
    Primitive(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("mismatch - expected: {expected}, got: {actual}")]
    Mismatch { expected: String, actual: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("unsupported {kind} algorithm: {algorithm}")]
    Unsupported { kind: String, algorithm: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl From<shanext_algorithms::Error> for EngineError {
    fn from(e: shanext_algorithms::Error) -> Self {
        EngineError::Primitive(e.to_string())
    }
}

impl From<shanext_api::Error> for EngineError {
    fn from(e: shanext_api::Error) -> Self {
        EngineError::Primitive(e.to_string())
    }
}

/// Compare a computed output against the expected hex string
pub fn check_hex(expected: &str, actual: &[u8]) -> Result<()> {
    let actual = hex::encode(actual);
    if actual.eq_ignore_ascii_case(expected) {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            expected: expected.to_string(),
            actual,
        })
    }
}
