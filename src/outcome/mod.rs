//! The [`Outcome`] type and its single-value combinators.
//!
//! An [`Outcome`] is either a success carrying a value or a failure carrying
//! one or more messages. Combinators on a single outcome (`map`, `bind`,
//! `map_error`, `flatten`, `ignore`) short-circuit: once an outcome has failed,
//! no further continuation runs and the original errors travel to the end of
//! the chain.
//!
//! # Key Components
//!
//! - [`Outcome`] - The two-track value
//! - [`NOT_INITIALIZED`] - Message reported by `Outcome::default()`
//! - Iterator adapters over the success value
//!
//! # Examples
//!
//! ```
//! use railway::Outcome;
//!
//! let mut calls = 0;
//! let outcome = Outcome::<i32>::failure("e").map(|x| {
//!     calls += 1;
//!     x + 1
//! });
//!
//! assert_eq!(outcome.errors(), ["e"]);
//! assert_eq!(calls, 0);
//! ```
pub mod core;
pub mod iter;

pub use self::core::*;
pub use self::iter::*;
