use crate::outcome::Outcome;
use crate::trace;
use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;

/// Gathers every success value, or returns the first failure.
///
/// Scans left to right. If every element is a success the values come back
/// in input order, one per element. Otherwise the first failure is returned
/// and elements after it are not read. An empty input yields `Success(vec![])`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome};
///
/// let all = combine([Outcome::<_, &str>::success(10), Outcome::success(20), Outcome::success(30)]);
/// assert_eq!(all, Outcome::Success(vec![10, 20, 30]));
///
/// let first = combine([Outcome::success(1), Outcome::failure("e1"), Outcome::failure("e2")]);
/// assert_eq!(first, Outcome::Failure("e1"));
/// ```
#[inline]
pub fn combine<I, V, E>(results: I) -> Outcome<Vec<V>, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    combine_into(results)
}

/// [`combine`] into any collection.
///
/// If `C` stops consuming values early, the remaining input is still scanned
/// up to its first failure, which is returned in place of the partial
/// collection.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use outcome_rail::{combine_into, Outcome};
///
/// let set: Outcome<BTreeSet<u8>, ()> =
///     combine_into([Outcome::success(3), Outcome::success(1), Outcome::success(3)]);
/// assert_eq!(set.into_success().map(|s| s.len()), Some(2));
/// ```
pub fn combine_into<C, I, V, E>(results: I) -> Outcome<C, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
    C: FromIterator<V>,
{
    let mut source = results.into_iter();
    let mut failure = None;
    let mut step = 0;
    let values = source
        .by_ref()
        .map_while(|outcome| match outcome {
            Outcome::Success(value) => {
                step += 1;
                Some(value)
            }
            Outcome::Failure(error) => {
                failure = Some(error);
                None
            }
        })
        .collect::<C>();

    // `C` may stop pulling before the input runs out; a failure left unread
    // still decides the result.
    if failure.is_none() {
        failure = source.find_map(|outcome| match outcome {
            Outcome::Success(_) => {
                step += 1;
                None
            }
            Outcome::Failure(error) => Some(error),
        });
    }

    match failure {
        Some(error) => {
            trace::short_circuit("combine", step);
            Outcome::Failure(error)
        }
        None => Outcome::Success(values),
    }
}

/// Returns every success value in input order, dropping failures.
///
/// Always traverses the whole input and never fails.
///
/// # Examples
///
/// ```
/// use outcome_rail::{get_all, Outcome};
///
/// let values = get_all([Outcome::success("a"), Outcome::failure(1), Outcome::success("b")]);
/// assert_eq!(values, vec!["a", "b"]);
/// ```
#[inline]
pub fn get_all<I, V, E>(results: I) -> Vec<V>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    get_all_into(results)
}

/// [`get_all`] into any collection.
pub fn get_all_into<C, I, V, E>(results: I) -> C
where
    I: IntoIterator<Item = Outcome<V, E>>,
    C: FromIterator<V>,
{
    let (mut successes, mut failures) = (0, 0);
    let values = results
        .into_iter()
        .filter_map(|outcome| match outcome {
            Outcome::Success(value) => {
                successes += 1;
                Some(value)
            }
            Outcome::Failure(_) => {
                failures += 1;
                None
            }
        })
        .collect();

    trace::traversed("get_all", successes, failures);
    values
}

/// Returns every error in input order, dropping successes.
///
/// Always traverses the whole input and never fails.
///
/// # Examples
///
/// ```
/// use outcome_rail::{get_all_errors, Outcome};
///
/// let errors = get_all_errors([
///     Outcome::failure("E2"),
///     Outcome::success("a"),
///     Outcome::failure("E2"),
///     Outcome::success("b"),
///     Outcome::failure("E1"),
/// ]);
/// assert_eq!(errors.as_slice(), &["E2", "E2", "E1"]);
/// ```
#[inline]
pub fn get_all_errors<I, V, E>(results: I) -> ErrorVec<E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    get_all_errors_into(results)
}

/// [`get_all_errors`] into any collection.
pub fn get_all_errors_into<C, I, V, E>(results: I) -> C
where
    I: IntoIterator<Item = Outcome<V, E>>,
    C: FromIterator<E>,
{
    let (mut successes, mut failures) = (0, 0);
    let errors = results
        .into_iter()
        .filter_map(|outcome| match outcome {
            Outcome::Success(_) => {
                successes += 1;
                None
            }
            Outcome::Failure(error) => {
                failures += 1;
                Some(error)
            }
        })
        .collect();

    trace::traversed("get_all_errors", successes, failures);
    errors
}

/// Splits outcomes into success values and errors in a single pass.
///
/// Both halves keep their input order and their lengths add up to the input
/// length. The result equals `(get_all(s), get_all_errors(s))`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{partition, Outcome};
///
/// let (values, errors) =
///     partition([Outcome::failure("E2"), Outcome::success("x"), Outcome::failure("E1")]);
/// assert_eq!(values, vec!["x"]);
/// assert_eq!(errors.as_slice(), &["E2", "E1"]);
/// ```
#[inline]
pub fn partition<I, V, E>(results: I) -> (Vec<V>, ErrorVec<E>)
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    partition_into(results)
}

/// [`partition`] into any pair of extendable collections.
///
/// # Examples
///
/// ```
/// use std::collections::VecDeque;
/// use outcome_rail::{partition_into, Outcome};
///
/// let (values, errors): (VecDeque<i32>, Vec<&str>) =
///     partition_into([Outcome::success(1), Outcome::failure("bad"), Outcome::success(2)]);
/// assert_eq!(values, VecDeque::from([1, 2]));
/// assert_eq!(errors, vec!["bad"]);
/// ```
pub fn partition_into<S, F, I, V, E>(results: I) -> (S, F)
where
    I: IntoIterator<Item = Outcome<V, E>>,
    S: Default + Extend<V>,
    F: Default + Extend<E>,
{
    let mut values = S::default();
    let mut errors = F::default();
    let (mut successes, mut failures) = (0, 0);

    for outcome in results {
        match outcome {
            Outcome::Success(value) => {
                values.extend(core::iter::once(value));
                successes += 1;
            }
            Outcome::Failure(error) => {
                errors.extend(core::iter::once(error));
                failures += 1;
            }
        }
    }

    trace::traversed("partition", successes, failures);
    (values, errors)
}
