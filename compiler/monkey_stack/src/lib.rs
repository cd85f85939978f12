//! Stack growth for deep recursion.
//!
//! The parser and the evaluator both recurse once per nesting level of the
//! source tree, and Monkey programs recurse through user functions. Wrapping
//! those recursive entry points in [`ensure_sufficient_stack`] moves the
//! work onto a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` this is a passthrough.

/// Grow when fewer than this many bytes of stack remain.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a new stack segment if the current one is
/// close to exhaustion.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// `wasm32` manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
