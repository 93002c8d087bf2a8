//! Error handling for the shanext API surface

pub mod types;

pub use types::{Error, Result};

#[cfg(feature = "std")]
impl From<std::array::TryFromSliceError> for Error {
    fn from(_: std::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0,
            actual: 0,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Other {
            context: "I/O operation",
            message: e.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
