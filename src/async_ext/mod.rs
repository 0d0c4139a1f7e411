//! Async extensions for railway.
//!
//! Everything here keeps the two laws of the synchronous API: continuations
//! short-circuit on the first failure, while aggregation over several
//! futures waits for all of them and accumulates every failure.
//!
//! # Feature Flag
//!
//! Requires the `async` feature (enabled by default):
//!
//! ```toml
//! [dependencies]
//! railway = { version = "0.1", features = ["async"] }
//! ```
//!
//! # Examples
//!
//! ```
//! use railway::prelude_async::*;
//!
//! async fn price(item: &str) -> Outcome<u32> {
//!     match item {
//!         "apple" => Outcome::success(3),
//!         other => Outcome::failure(format!("unknown item {other}")),
//!     }
//! }
//!
//! async fn example() {
//!     let total = sequence_async([price("apple"), price("pear")])
//!         .map_outcome(|prices| prices.iter().sum::<u32>())
//!         .await;
//!     assert_eq!(total.errors(), ["unknown item pear"]);
//! }
//! ```

mod future_ext;
mod lift_future;
mod outcome_future;
mod sequence;

#[cfg(feature = "async-tokio")]
mod tokio_ext;
#[cfg(feature = "tracing")]
mod tracing_ext;

pub use future_ext::FutureOutcomeExt;
pub use lift_future::{LiftFuture, SuccessFuture};
pub use outcome_future::{
    BindOutcome, BindOutcomeAsync, FlattenOutcome, IgnoreOutcome, MapOutcome, MapOutcomeAsync,
    MapOutcomeError,
};
pub use sequence::{sequence_async, sequence_unit_async};

#[cfg(feature = "async-tokio")]
pub use tokio_ext::sequence_spawned;
#[cfg(feature = "tracing")]
pub use tracing_ext::{trace_failure, FutureSpanExt, OutcomeSpanExt, SpanContextFuture};
