//! Constant-time comparison helpers
//!
//! Both comparisons return early when the two inputs differ in length. The
//! length of a digest or encoded tag is public, so only the content is
//! protected: for equal-length inputs every byte is examined regardless of
//! where the first difference occurs.

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns `false` immediately on a length mismatch, otherwise compares the
/// contents without an early exit.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Constant-time comparison of two strings, e.g. hex digests or Base64 keys
///
/// Same contract as [`ct_eq`], applied to the UTF-8 bytes of each string.
pub fn ct_str_eq(a: &str, b: &str) -> bool {
    ct_eq(a.as_bytes(), b.as_bytes())
}
