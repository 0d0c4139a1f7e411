//! Async prelude: everything from [`prelude`](crate::prelude) plus the async
//! combinators.
//!
//! ```
//! use railway::prelude_async::*;
//! ```
//!
//! # What's Included
//!
//! - Everything in [`prelude`](crate::prelude)
//! - **Macros**: [`combine_async!`]
//! - **Traits**: [`FutureOutcomeExt`]
//! - **Functions**: [`sequence_async`], [`sequence_unit_async`], [`lift_async`], [`lift_bind_async`]

pub use crate::prelude::*;

pub use crate::async_ext::{sequence_async, sequence_unit_async, FutureOutcomeExt};
pub use crate::combine_async;
pub use crate::lift::{lift_async, lift_bind_async};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::sequence_spawned;
