//! A success-or-failure type and the sequence operators that compose it.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Short-circuiting fold
//!
//! ```
//! use outcome_rail::{fold, Outcome};
//!
//! let budget = fold([30, 40, 50], 100, |left, cost| {
//!     if cost <= left {
//!         Outcome::success(left - cost)
//!     } else {
//!         Outcome::failure(cost)
//!     }
//! });
//!
//! assert_eq!(budget, Outcome::Failure(50));
//! ```
//!
//! ## Accumulating partition
//!
//! ```
//! use outcome_rail::{partition, Outcome};
//!
//! let (values, errors) = partition(["1", "two", "3"].map(|s| Outcome::from_result(s.parse::<i32>())));
//!
//! assert_eq!(values, vec![1, 3]);
//! assert_eq!(errors.len(), 1);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Sequence operators: fold, fold_right, combine, get_all, get_all_errors, partition
pub mod combinators;
/// Conversions between Result and Outcome
pub mod convert;
/// Variadic forms of the sequence operators
pub mod macros;
/// The Outcome type and its iterators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Iterator extension traits
pub mod traits;
/// Shared collection types
pub mod types;

mod trace;

pub use combinators::*;
pub use convert::*;
pub use outcome::Outcome;
pub use traits::*;
pub use types::ErrorVec;
