//! The [`Outcome`] type: a success value or an error.
//!
//! # Key Components
//!
//! - [`Outcome`] - Two-variant container every combinator consumes or produces
//! - Iterators over the success value and the error
//! - `FromIterator` collection that stops at the first failure
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::Outcome;
//!
//! let parsed: Outcome<u8, String> = "42".parse::<u8>().map_err(|e| e.to_string()).into();
//! assert!(parsed.is_success());
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
