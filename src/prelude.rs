//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! let total = fold([1, 2, 3], 0, |acc, x| Outcome::<_, ()>::success(acc + x));
//! assert_eq!(total, Outcome::Success(6));
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`ErrorVec`]
//! - **Functions**: [`fold`], [`fold_right`], [`combine`], [`get_all`], [`get_all_errors`], [`partition`] (each also as a macro)
//! - **Traits**: [`FoldOutcomeExt`], [`OutcomeIterExt`]

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::ErrorVec;

// Combinators; `combine` and friends bring both the function and the variadic macro
pub use crate::combinators::{fold, fold_right};
pub use crate::{combine, get_all, get_all_errors, partition};

// Traits
pub use crate::traits::{FoldOutcomeExt, OutcomeIterExt};
