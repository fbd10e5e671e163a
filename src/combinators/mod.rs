//! Sequence-level operators over [`Outcome`](crate::Outcome).
//!
//! Two policies live here:
//!
//! - **Short-circuiting** ([`fold`], [`fold_right`], [`combine`]): stop at the
//!   first failure in traversal order and hand it back untouched.
//! - **Accumulating** ([`get_all`], [`get_all_errors`], [`partition`]): visit
//!   every element and never fail.
//!
//! Every operator preserves input order in its output. The `*_into` variants
//! produce a caller-chosen collection instead of the default `Vec`/[`ErrorVec`](crate::ErrorVec).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::combinators::{combine, fold, partition};
//! use outcome_rail::Outcome;
//!
//! let parsed = ["1", "2", "x", "4"].map(|s| Outcome::from_result(s.parse::<i32>()));
//!
//! assert!(combine(parsed.clone()).is_failure());
//!
//! let (numbers, errors) = partition(parsed);
//! assert_eq!(numbers, vec![1, 2, 4]);
//! assert_eq!(errors.len(), 1);
//!
//! let total = fold(numbers, 0, |acc, n| Outcome::<_, ()>::success(acc + n));
//! assert_eq!(total, Outcome::Success(7));
//! ```
pub mod collect;
pub mod fold;

pub use self::collect::*;
pub use self::fold::*;
