//! Storage types shared by the outcome algebra.
//!
//! # Examples
//!
//! ```
//! use railway::types::Errors;
//!
//! let errors: Errors = ["name is empty", "age is negative"].into_iter().collect();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.first(), Some("name is empty"));
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod errors;

pub use errors::Errors;

/// SmallVec-backed collection used for accumulating failure messages.
///
/// Uses inline storage for a single element, which covers the common case of
/// a failure carrying exactly one message.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
