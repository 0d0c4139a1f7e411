//! Variadic shorthands for [`combine`](crate::combine()).
//!
//! - [`macro@crate::combine`] packs 1 to 10 outcome expressions without the
//!   surrounding tuple.
//! - [`macro@crate::combine_async`] awaits 1 to 10 futures of outcomes
//!   concurrently and packs what they resolve to.
//!
//! # Examples
//!
//! ```
//! use railway::{combine, Outcome};
//!
//! let total = combine!(Outcome::success(1), Outcome::success(2), Outcome::success(3))
//!     .map(|a, b, c| a + b + c);
//! assert_eq!(total, Outcome::success(6));
//! ```

/// Packs outcome expressions into a [`Combined`](crate::Combined).
///
/// `combine!(a, b, c)` is `combine((a, b, c))`. Every expression is evaluated
/// eagerly, left to right.
///
/// # Examples
///
/// ```rust
/// use railway::{combine, Outcome};
///
/// let report = combine!(
///     Outcome::<u8>::failure("bad port"),
///     Outcome::success("localhost"),
///     Outcome::<bool>::failure("bad flag"),
/// )
/// .map(|port, host, flag| (port, host, flag));
///
/// assert_eq!(report.errors(), ["bad port", "bad flag"]);
/// ```
#[macro_export]
macro_rules! combine {
    ($($outcome:expr),+ $(,)?) => {
        $crate::combine(($($outcome,)+))
    };
}

/// Awaits futures of outcomes concurrently and packs the results into a
/// [`Combined`](crate::Combined).
///
/// Expands to a future. All inputs are polled on the current task and each
/// one runs to completion, even when another has already failed.
///
/// Requires the `async` feature.
///
/// # Examples
///
/// ```rust
/// use railway::{combine_async, Outcome};
///
/// async fn user() -> Outcome<&'static str> {
///     Outcome::success("ada")
/// }
///
/// async fn quota() -> Outcome<u32> {
///     Outcome::failure("quota service down")
/// }
///
/// async fn example() {
///     let line = combine_async!(user(), quota())
///         .await
///         .map(|user, quota| format!("{user}: {quota}"));
///     assert_eq!(line.errors(), ["quota service down"]);
/// }
/// ```
#[cfg(feature = "async")]
#[macro_export]
macro_rules! combine_async {
    ($future:expr $(,)?) => {
        async { $crate::combine(($future.await,)) }
    };
    ($($future:expr),+ $(,)?) => {
        async { $crate::combine($crate::__private::join!($($future),+)) }
    };
}
