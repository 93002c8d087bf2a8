//! Error handling for digest and key-derivation primitives

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use core::fmt;

use shanext_api::{Error as CoreError, Result as CoreResult};

/// The error type for shanext primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Bound the length was checked against
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Algorithm name not known to the registry
    UnknownAlgorithm {
        /// The name as supplied by the caller
        name: String,
    },

    /// Working memory for a cost parameter could not be allocated
    ResourceExhaustion {
        /// Operation that requested the memory
        context: &'static str,
        /// Bytes requested
        requested: usize,
    },

    /// Processing error, e.g. a sponge used out of phase
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an UnknownAlgorithm error
    pub fn unknown_algorithm(name: &str) -> Self {
        Error::UnknownAlgorithm {
            name: name.to_string(),
        }
    }
}

/// Result type for primitive operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::UnknownAlgorithm { name } => {
                write!(f, "Unknown hash algorithm: {}", name)
            }
            Error::ResourceExhaustion { context, requested } => {
                write!(f, "Could not allocate {} bytes for {}", requested, context)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::UnknownAlgorithm { name } => CoreError::UnknownAlgorithm { name },
            Error::ResourceExhaustion { context, requested } => {
                CoreError::ResourceExhausted { context, requested }
            }
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to an API result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

pub mod validate;
