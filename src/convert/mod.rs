//! Conversion helpers between [`Result`] and [`Outcome`].
//!
//! These adapters make it straightforward to feed existing `Result`-returning
//! code into the combinators and to hand their output back to `?`-based code.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert_eq!(outcome, Outcome::Success(42));
//!
//! assert_eq!(outcome_to_result(outcome), Ok(42));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an `Outcome`.
///
/// # Returns
///
/// * `Outcome::Success(value)` if result is `Ok`
/// * `Outcome::Failure(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
/// use outcome_rail::Outcome;
///
/// let err: Result<i32, &str> = Err("failed");
/// assert_eq!(result_to_outcome(err), Outcome::Failure("failed"));
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` into a `Result`.
///
/// # Returns
///
/// * `Ok(value)` if outcome is `Success`
/// * `Err(error)` if outcome is `Failure`
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let failed = Outcome::<i32, &str>::failure("failed");
/// assert_eq!(outcome_to_result(failed), Err("failed"));
/// ```
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.into_result()
}

/// Converts each `Result` of an iterator into an `Outcome`, lazily.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::results_to_outcomes;
/// use outcome_rail::get_all_errors;
///
/// let parsed = ["7", "x", "9"].iter().map(|s| s.parse::<u8>());
/// assert_eq!(get_all_errors(results_to_outcomes(parsed)).len(), 1);
/// ```
#[inline]
pub fn results_to_outcomes<I, V, E>(results: I) -> impl Iterator<Item = Outcome<V, E>>
where
    I: IntoIterator<Item = Result<V, E>>,
{
    results.into_iter().map(Outcome::from_result)
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Outcome::from_result(result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}
