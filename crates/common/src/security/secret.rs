//! Secret data types with guaranteed zeroization
//!
//! `SecretBuffer` backs fixed-size keyed material such as HMAC inner and
//! outer pads. `SecretVec` backs variable-size scratch memory such as the
//! blocks of the legacy password hash, and can be allocated fallibly so a
//! caller asking for more memory than the process has gets an error instead
//! of an abort.

use core::fmt;
use core::ops::{Deref, DerefMut};
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(feature = "alloc")]
use alloc::{collections::TryReserveError, vec::Vec};

/// Fixed-size secret buffer, wiped on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Capacity of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// True only for `N == 0`
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the contents mutably
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Variable-size secret vector, wiped on drop
#[cfg(feature = "alloc")]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl SecretVec {
    /// Wrap an existing vector
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy a slice into a new secret vector
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Allocate `len` zero bytes, reporting allocation failure to the caller
    pub fn try_zeroed(len: usize) -> Result<Self, TryReserveError> {
        let mut data = Vec::new();
        data.try_reserve_exact(len)?;
        data.resize(len, 0);
        Ok(Self { data })
    }

    /// Number of bytes held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when no bytes are held
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the contents
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Borrow the contents mutably
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(feature = "alloc")]
impl AsMut<[u8]> for SecretVec {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(feature = "alloc")]
impl From<Vec<u8>> for SecretVec {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

#[cfg(feature = "alloc")]
impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

/// Guard that zeroizes the borrowed value when it goes out of scope
///
/// Used for message schedules and working variables inside compression
/// functions, so they are scrubbed on every exit path.
pub struct ZeroizeGuard<'a, T: Zeroize> {
    value: &'a mut T,
}

impl<'a, T: Zeroize> ZeroizeGuard<'a, T> {
    /// Guard `value` until the end of the current scope
    pub fn new(value: &'a mut T) -> Self {
        Self { value }
    }
}

impl<T: Zeroize> Drop for ZeroizeGuard<'_, T> {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl<T: Zeroize> Deref for ZeroizeGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        self.value
    }
}

impl<T: Zeroize> DerefMut for ZeroizeGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.value
    }
}
