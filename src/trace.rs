//! Diagnostic events emitted by the combinators.
//!
//! With the `tracing` feature enabled, each combinator reports how its
//! traversal ended as a `trace`-level event under the `outcome_rail` target.
//! Without the feature these functions are empty and inline away.
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

/// Reports that a short-circuiting traversal stopped at `step`.
///
/// `step` counts elements consumed in traversal order, starting at zero, so
/// for `fold_right` it is the distance from the tail.
#[inline]
pub(crate) fn short_circuit(operator: &'static str, step: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "outcome_rail", operator, step, "stopped at first failure");
    #[cfg(not(feature = "tracing"))]
    let _ = (operator, step);
}

/// Reports the split produced by a full, non-short-circuiting traversal.
#[inline]
pub(crate) fn traversed(operator: &'static str, successes: usize, failures: usize) {
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "outcome_rail", operator, successes, failures, "traversal complete");
    #[cfg(not(feature = "tracing"))]
    let _ = (operator, successes, failures);
}
