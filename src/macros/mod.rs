//! Variadic shorthands for the sequence combinators.
//!
//! Each macro collects its comma-separated arguments into an array and passes
//! it to the function of the same name:
//!
//! - [`macro@crate::combine`] - first failure, or every value
//! - [`macro@crate::get_all`] - every success value
//! - [`macro@crate::get_all_errors`] - every error
//! - [`macro@crate::partition`] - values and errors in one pass
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{combine, partition, Outcome};
//!
//! let all = combine![Outcome::<_, &str>::success(10), Outcome::success(20), Outcome::success(30)];
//! assert_eq!(all, Outcome::Success(vec![10, 20, 30]));
//!
//! let (values, errors) = partition![
//!     Outcome::failure("E2"),
//!     Outcome::success("x"),
//!     Outcome::failure("E1"),
//! ];
//! assert_eq!(values, vec!["x"]);
//! assert_eq!(errors.as_slice(), &["E2", "E1"]);
//! ```

/// Gathers every success value of its arguments, or returns the first failure.
///
/// Expands to [`combinators::combine`](crate::combinators::combine) over an
/// array of the arguments.
///
/// # Examples
///
/// ```
/// use outcome_rail::{combine, Outcome};
///
/// let first = combine![Outcome::<i32, _>::failure("a"), Outcome::failure("b")];
/// assert_eq!(first, Outcome::Failure("a"));
/// ```
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),* $(,)?) => {
        $crate::combinators::combine([$($outcome),*])
    };
}

/// Returns the success values of its arguments in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{get_all, Outcome};
///
/// let values = get_all![Outcome::success(1), Outcome::<_, ()>::failure(()), Outcome::success(2)];
/// assert_eq!(values, vec![1, 2]);
/// ```
#[macro_export]
macro_rules! get_all {
    ($($outcome:expr),* $(,)?) => {
        $crate::combinators::get_all([$($outcome),*])
    };
}

/// Returns the errors of its arguments in order.
///
/// # Examples
///
/// ```
/// use outcome_rail::{get_all_errors, Outcome};
///
/// let errors = get_all_errors![Outcome::<(), _>::failure(2), Outcome::failure(1)];
/// assert_eq!(errors.as_slice(), &[2, 1]);
/// ```
#[macro_export]
macro_rules! get_all_errors {
    ($($outcome:expr),* $(,)?) => {
        $crate::combinators::get_all_errors([$($outcome),*])
    };
}

/// Splits its arguments into success values and errors.
#[macro_export]
macro_rules! partition {
    ($($outcome:expr),* $(,)?) => {
        $crate::combinators::partition([$($outcome),*])
    };
}
