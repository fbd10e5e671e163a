//! Method-call form of [`fold`](crate::combinators::fold) and
//! [`fold_right`](crate::combinators::fold_right).

use crate::combinators;
use crate::outcome::Outcome;

/// Short-circuiting folds available on every iterator.
///
/// Both methods behave exactly like their free-function counterparts,
/// including the argument order handed to `operation`.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::FoldOutcomeExt;
/// use outcome_rail::Outcome;
///
/// let checked = [200u8, 50, 10].into_iter().fold_outcome(0u8, |acc, x| {
///     acc.checked_add(x).map_or(Outcome::failure("overflow"), Outcome::success)
/// });
/// assert_eq!(checked, Outcome::Failure("overflow"));
/// ```
pub trait FoldOutcomeExt: Iterator + Sized {
    /// Folds left to right, `operation(accumulator, element)`, stopping at the
    /// first failure.
    fn fold_outcome<A, E, F>(self, initial: A, operation: F) -> Outcome<A, E>
    where
        F: FnMut(A, Self::Item) -> Outcome<A, E>,
    {
        combinators::fold(self, initial, operation)
    }

    /// Folds right to left, `operation(element, accumulator)`, stopping at the
    /// first failure met from the tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::traits::FoldOutcomeExt;
    /// use outcome_rail::Outcome;
    ///
    /// let list = ["a", "b", "c"]
    ///     .into_iter()
    ///     .fold_outcome_right(Vec::new(), |x, mut acc| {
    ///         acc.push(x);
    ///         Outcome::<_, ()>::success(acc)
    ///     });
    /// assert_eq!(list, Outcome::Success(vec!["c", "b", "a"]));
    /// ```
    fn fold_outcome_right<A, E, F>(self, initial: A, operation: F) -> Outcome<A, E>
    where
        Self: DoubleEndedIterator,
        F: FnMut(Self::Item, A) -> Outcome<A, E>,
    {
        combinators::fold_right(self, initial, operation)
    }
}

impl<I: Iterator> FoldOutcomeExt for I {}
