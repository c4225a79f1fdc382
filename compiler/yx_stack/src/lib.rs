//! Stack growth for the tree-walking evaluator.
//!
//! Evaluation of a Yxlang tree is plain recursion: every node evaluates its
//! children, and every user-defined function call evaluates a whole body.
//! A recursive Yxlang function therefore turns into a chain of native
//! frames several levels deep per activation. [`ensure_sufficient_stack`]
//! keeps that chain from hitting the end of the thread's stack by growing
//! onto a fresh segment when the remaining space drops below a red zone.
//!
//! This is not a recursion limit. Runaway recursion still runs until memory
//! is exhausted; only well-founded deep recursion benefits.
//!
//! On `wasm32` the wrapper is a passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the native stack first if less than the red zone remains.
///
/// ```text
/// fn evaluate(&self, env: &mut Environment) -> f64 {
///     ensure_sufficient_stack(|| match self { /* recurse into children */ })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Bytes of native stack left on the current segment, when known.
///
/// Used for diagnostics only; evaluation never branches on it.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn remaining_stack() -> Option<usize> {
    stacker::remaining_stack()
}

/// WASM version: unknown.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn remaining_stack() -> Option<usize> {
    None
}
