use crate::outcome::Outcome;
use crate::trace;

/// Threads an accumulator through `sequence` left to right, stopping at the
/// first failure.
///
/// `operation` receives `(accumulator, element)`. Each success replaces the
/// accumulator; the first failure is returned as-is, `operation` is not called
/// again and the iterator is not advanced further. An exhausted sequence
/// yields `Success(accumulator)`, so an empty one yields `Success(initial)`.
///
/// # Arguments
///
/// * `sequence` - Elements to visit, in order
/// * `initial` - Starting accumulator
/// * `operation` - Step producing the next accumulator or an error
///
/// # Examples
///
/// ```
/// use outcome_rail::{fold, Outcome};
///
/// let sum = fold([20, 30, 40, 50], 10, |acc, x| Outcome::<_, ()>::success(acc + x));
/// assert_eq!(sum, Outcome::Success(150));
///
/// let stopped = fold([5, 10, 15, 20, 25], 1, |acc, x| match x {
///     15 => Outcome::failure("fifteen"),
///     60 => Outcome::failure("sixty"),
///     _ => Outcome::success(acc + x),
/// });
/// assert_eq!(stopped, Outcome::Failure("fifteen"));
/// ```
pub fn fold<I, A, E, F>(sequence: I, initial: A, mut operation: F) -> Outcome<A, E>
where
    I: IntoIterator,
    F: FnMut(A, I::Item) -> Outcome<A, E>,
{
    let mut accumulator = initial;
    for (step, element) in sequence.into_iter().enumerate() {
        match operation(accumulator, element) {
            Outcome::Success(next) => accumulator = next,
            Outcome::Failure(error) => {
                trace::short_circuit("fold", step);
                return Outcome::Failure(error);
            }
        }
    }
    Outcome::Success(accumulator)
}

/// Threads an accumulator through `sequence` right to left, stopping at the
/// first failure met from the tail.
///
/// `operation` receives `(element, accumulator)`, the reverse of [`fold`].
/// The last element is visited first. When several elements would fail, the
/// one nearest the end of the sequence wins and nothing to its left is
/// visited. An empty sequence yields `Success(initial)`.
///
/// # Arguments
///
/// * `sequence` - Elements to visit; its iterator must be double-ended
/// * `initial` - Starting accumulator
/// * `operation` - Step taking the element first, then the accumulator
///
/// # Examples
///
/// ```
/// use outcome_rail::{fold_right, Outcome};
///
/// let digits = fold_right([1, 2, 3], String::new(), |d, mut acc: String| {
///     acc.push_str(&d.to_string());
///     Outcome::<_, ()>::success(acc)
/// });
/// assert_eq!(digits, Outcome::Success("321".to_string()));
///
/// let nearest_tail = fold_right([1, -2, 3, -4, 5], 0, |x, acc| {
///     if x < 0 {
///         Outcome::failure(x)
///     } else {
///         Outcome::success(acc + x)
///     }
/// });
/// assert_eq!(nearest_tail, Outcome::Failure(-4));
/// ```
pub fn fold_right<I, A, E, F>(sequence: I, initial: A, mut operation: F) -> Outcome<A, E>
where
    I: IntoIterator,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(I::Item, A) -> Outcome<A, E>,
{
    let mut accumulator = initial;
    for (step, element) in sequence.into_iter().rev().enumerate() {
        match operation(element, accumulator) {
            Outcome::Success(next) => accumulator = next,
            Outcome::Failure(error) => {
                trace::short_circuit("fold_right", step);
                return Outcome::Failure(error);
            }
        }
    }
    Outcome::Success(accumulator)
}
