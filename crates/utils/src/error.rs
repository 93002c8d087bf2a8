//! Error type for the salted-hash, encoding and configuration helpers

use thiserror::Error;

/// Errors returned by `shanext-utils`
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input rejected before any work was done
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A stored `"<hex>:<base64>"` record could not be parsed
    #[error("malformed stored hash: {0}")]
    MalformedRecord(String),

    /// Failure inside a digest or key-derivation primitive
    #[error(transparent)]
    Primitive(#[from] shanext_algorithms::Error),

    /// Hex decode error
    #[error("hex decode error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Base64 decode error
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes were not valid UTF-8
    #[error("decoded data is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error while reading a file or stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for `shanext-utils`
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn empty(what: &str) -> Self {
        Error::InvalidParameter(format!("{} cannot be empty", what))
    }
}

impl From<Error> for shanext_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::InvalidParameter(message) => shanext_api::Error::InvalidParameter {
                context: "shanext-utils",
                message,
            },
            other => shanext_api::Error::Other {
                context: "shanext-utils",
                message: other.to_string(),
            },
        }
    }
}
