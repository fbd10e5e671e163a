//! Shared collection types.
//!
//! Errors gathered by [`get_all_errors`](crate::combinators::get_all_errors) and
//! [`partition`](crate::combinators::partition) land in an [`ErrorVec`], which
//! keeps a single error inline and only spills to the heap beyond that.
use smallvec::SmallVec;

pub mod alloc_type;

/// SmallVec-backed collection used for accumulated errors.
///
/// Uses inline storage for one element, the common case when most steps
/// succeed.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
