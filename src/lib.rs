//! Railway-oriented composition for fallible computations.
//!
//! An [`Outcome<T>`] is either a success carrying a `T`, or a failure carrying
//! an ordered list of string messages ([`Errors`]). Two composition laws run
//! through the whole crate:
//!
//! - **Short-circuit**: [`Outcome::map`] and [`Outcome::bind`] (and their
//!   async twins) stop at the first failure; later steps never run.
//! - **Accumulate**: [`sequence`], [`combine()`] and [`lift`] inspect every
//!   input and report the errors of all failing inputs, in input order.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `railway::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining
//!
//! ```
//! use railway::Outcome;
//!
//! let three = Outcome::success(1).map(|x| x + 1).map(|x| x + 1);
//! assert_eq!(three, Outcome::success(3));
//!
//! let halted = Outcome::<i32>::failure("no input").map(|x| x + 1);
//! assert_eq!(halted.errors(), ["no input"]);
//! ```
//!
//! ## Accumulation
//!
//! ```
//! use railway::{combine, Outcome};
//!
//! let user = combine!(
//!     Outcome::<String>::failure("name is empty"),
//!     Outcome::success(30u8),
//!     Outcome::<String>::failure("email is invalid"),
//! )
//! .map(|name, age, email| (name, age, email));
//!
//! assert_eq!(user.errors(), ["name is empty", "email is invalid"]);
//! ```
//!
//! ## Lifting
//!
//! ```
//! use railway::{lift, Invoke, Outcome};
//!
//! let add = lift(|a: i32, b: i32| a + b);
//! let sum = add.apply(Outcome::success(2)).apply_value(3).invoke(());
//! assert_eq!(sum, Outcome::success(5));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Combine: a fixed-arity view over several outcomes
pub mod combine;
/// Conversions between `Result`, `Option`, and `Outcome`
pub mod convert;
/// Lifting plain functions onto the outcome rail
pub mod lift;
/// Variadic `combine!` and `combine_async!` macros
pub mod macros;
/// The `Outcome` type and its combinators
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Accumulating aggregation over collections of outcomes
pub mod sequence;
/// Capability traits shared by outcome shapes
pub mod traits;
/// Error collection and allocation aliases
pub mod types;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - all async utilities in one import (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

#[doc(hidden)]
#[cfg(feature = "async")]
pub mod __private {
    pub use futures_util::join;
}

pub use combine::{combine, Combined};
pub use lift::{
    lift, lift_bind, Applied, Binding, Function, Invoke, Lifted, Mapping, Merge, Prepend,
};
#[cfg(feature = "async")]
pub use lift::{lift_async, lift_bind_async, BindingAsync, MappingAsync};
pub use outcome::{Outcome, NOT_INITIALIZED};
pub use sequence::{sequence, sequence_unit};
pub use traits::{IntoOutcome, Railway};
pub use types::{ErrorVec, Errors};
