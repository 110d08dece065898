//! Stack growth for recursive tree walks.
//!
//! Surface and ANF trees produced from generated code can nest tens of
//! thousands of levels deep. Every recursive walk in the traversal engines
//! and analyses goes through [`ensure_sufficient_stack`], which grows the
//! native stack on demand instead of overflowing.
//!
//! On `wasm32` the call is a plain passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
