//! Extension traits that expose the combinators as iterator methods.
//!
//! - [`FoldOutcomeExt`]: `fold_outcome` / `fold_outcome_right` on any iterator
//! - [`OutcomeIterExt`]: combine, filter and partition iterators of [`Outcome`](crate::Outcome)
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{FoldOutcomeExt, OutcomeIterExt};
//! use outcome_rail::Outcome;
//!
//! let product = (1..=4).fold_outcome(1, |acc, x| Outcome::<_, ()>::success(acc * x));
//! assert_eq!(product, Outcome::Success(24));
//!
//! let odd = (1..=5)
//!     .map(|x| if x % 2 == 1 { Outcome::success(x) } else { Outcome::failure(x) })
//!     .successes()
//!     .collect::<Vec<_>>();
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

pub mod fold_ext;
pub mod outcome_iter_ext;

pub use fold_ext::FoldOutcomeExt;
pub use outcome_iter_ext::OutcomeIterExt;
