//! Iterator methods for sequences of [`Outcome`].

use crate::combinators;
use crate::outcome::Outcome;
use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;

/// Combinators available on every iterator of outcomes.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::OutcomeIterExt;
/// use outcome_rail::Outcome;
///
/// let inputs = vec![Outcome::success(1), Outcome::failure("bad"), Outcome::success(3)];
///
/// assert_eq!(inputs.clone().into_iter().combine_outcomes(), Outcome::Failure("bad"));
///
/// let (values, errors) = inputs.into_iter().partition_outcomes();
/// assert_eq!(values, vec![1, 3]);
/// assert_eq!(errors.as_slice(), &["bad"]);
/// ```
pub trait OutcomeIterExt<V, E>: Iterator<Item = Outcome<V, E>> + Sized {
    /// See [`combine`](crate::combinators::combine).
    fn combine_outcomes(self) -> Outcome<Vec<V>, E> {
        combinators::combine(self)
    }

    /// Lazily yields the success values, skipping failures.
    fn successes(self) -> impl Iterator<Item = V> {
        self.filter_map(Outcome::into_success)
    }

    /// Lazily yields the errors, skipping successes.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::OutcomeIterExt;
    /// use outcome_rail::Outcome;
    ///
    /// let first_error = [Outcome::success(1), Outcome::failure('x'), Outcome::failure('y')]
    ///     .into_iter()
    ///     .failures()
    ///     .next();
    /// assert_eq!(first_error, Some('x'));
    /// ```
    fn failures(self) -> impl Iterator<Item = E> {
        self.filter_map(Outcome::into_failure)
    }

    /// See [`partition`](crate::combinators::partition).
    fn partition_outcomes(self) -> (Vec<V>, ErrorVec<E>) {
        combinators::partition(self)
    }
}

impl<I, V, E> OutcomeIterExt<V, E> for I where I: Iterator<Item = Outcome<V, E>> {}
