//! Compiler barriers around secret-dependent work
//!
//! Compression functions bracket their round loops with these so the
//! optimiser cannot fold scrubbing stores into the surrounding code.

use core::sync::atomic::{compiler_fence, Ordering};

/// Insert a sequentially-consistent compiler fence
#[inline(always)]
pub fn compiler_fence_seq_cst() {
    compiler_fence(Ordering::SeqCst);
}

/// Run `f` between two compiler fences and return its result
#[inline(always)]
pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
    compiler_fence_seq_cst();
    let result = f();
    compiler_fence_seq_cst();
    result
}
