//! Concurrent fan-out over futures of outcomes.

use core::future::Future;

use futures_util::future::join_all;

use crate::sequence::{sequence, sequence_unit};
use crate::types::alloc_type::Vec;
use crate::Outcome;

/// Drives every future concurrently, then aggregates their outcomes.
///
/// All futures are polled on the caller's task and each one runs to
/// completion; a failing future never cancels the others. The aggregate
/// follows [`sequence`]: it succeeds iff all succeed, and otherwise reports
/// every failing future's errors in input order.
///
/// # Examples
///
/// ```rust
/// use railway::async_ext::sequence_async;
/// use railway::Outcome;
///
/// async fn fetch(n: i32) -> Outcome<i32> {
///     Outcome::success(n)
/// }
///
/// async fn example() {
///     let outcome = sequence_async([fetch(1), fetch(2)]).await;
///     assert_eq!(outcome.into_value(), Some(vec![1, 2]));
/// }
/// ```
pub async fn sequence_async<T, Fut, I>(futures: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    sequence(join_all(futures).await)
}

/// Like [`sequence_async`], discarding the success values.
pub async fn sequence_unit_async<T, Fut, I>(futures: I) -> Outcome<()>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>>,
{
    sequence_unit(join_all(futures).await)
}
