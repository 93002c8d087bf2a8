//! Error type definitions for digest and key-derivation operations

use alloc::string::String;
use core::fmt;

/// Primary error type for the shanext API surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A caller-supplied parameter was rejected
    InvalidParameter {
        /// Operation or parameter that failed
        context: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// A length did not satisfy its bound
    InvalidLength {
        /// Operation or buffer that failed
        context: &'static str,
        /// Bound the length was checked against
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// An algorithm name was not recognised by the registry
    UnknownAlgorithm {
        /// The name as supplied
        name: String,
    },

    /// A working-memory allocation could not be satisfied
    ResourceExhausted {
        /// Operation that requested the memory
        context: &'static str,
        /// Bytes requested
        requested: usize,
    },

    /// Any other failure
    Other {
        /// Operation that failed
        context: &'static str,
        /// Human-readable reason
        message: String,
    },
}

/// Result type for shanext API operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an existing error, keeping its payload
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::UnknownAlgorithm { name } => Self::UnknownAlgorithm { name },
            Self::ResourceExhausted { requested, .. } => {
                Self::ResourceExhausted { context, requested }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::UnknownAlgorithm { name } => {
                write!(f, "unknown hash algorithm: {}", name)
            }
            Self::ResourceExhausted { context, requested } => {
                write!(f, "{}: could not allocate {} bytes", context, requested)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
