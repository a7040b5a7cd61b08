//! Stack growth for recursive descent.
//!
//! The parser, the AST builder and the dump printer all recurse once per
//! nesting level of the source (`f(g(h(...)))`, `((((x))))`, long operator
//! chains). Each recursive entry point runs its body through
//! [`ensure_sufficient_stack`] so pathological input grows the stack instead
//! of aborting the process.
//!
//! On wasm32 the call is a plain passthrough.

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

#[cfg(test)]
mod tests;
