//! Stack growth for deep recursion.
//!
//! The parser recurses once per nested sub-expression and the evaluator once
//! per nested expression or function call. Both wrap their recursive entry
//! points in [`ensure_sufficient_stack`] so that deeply nested source such as
//! `((((...))))` or a long chain of `fn` calls grows the stack on the heap
//! instead of overflowing the host thread's stack.
//!
//! - **Red zone**: 64KB. If less than this remains, a new segment is allocated.
//! - **Segment size**: 1MB per growth.
//!
//! On `wasm32` this is a passthrough.

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 64 * 1024;

/// Stack space allocated per growth.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
