//! Stack growth for the recursive parts of the front end.
//!
//! The parser descends once per nesting level of `(`, unary operator and
//! block; the evaluator descends once per nested expression and per user
//! function call. Scripts like `((((...))))` or deeply recursive functions
//! would otherwise overflow the host thread's stack long before the
//! interpreter's own call-depth limit kicks in.
//!
//! Wrap each recursive entry point in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn unary(&mut self) -> Result<Expr, ParseError> {
//!     ensure_sufficient_stack(|| { /* may recurse into unary() */ })
//! }
//! ```
//!
//! On native targets the stack is grown with `stacker`; on wasm the closure
//! is called directly.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than [`RED_ZONE`] bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Wasm manages its own stack; call through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
