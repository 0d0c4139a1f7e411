//! Tokio-specific async extensions.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! railway = { version = "0.1", features = ["async-tokio"] }
//! ```

use core::future::Future;

use crate::sequence::sequence;
use crate::types::alloc_type::Vec;
use crate::Outcome;

/// Spawns every future on the ambient Tokio runtime, then aggregates their
/// outcomes.
///
/// Unlike [`sequence_async`](super::sequence_async), which polls all inputs on
/// the caller's task, each input runs as its own Tokio task and may execute
/// in parallel on a multi-threaded runtime. Every task runs to completion and
/// a failing one never cancels the others.
///
/// A task that panicked resumes its panic on the caller. A task cancelled by
/// runtime shutdown is reported as a failure carrying the join error message.
///
/// # Panics
///
/// Panics when called outside a Tokio runtime, or when one of the spawned
/// futures panicked.
///
/// # Example
///
/// ```rust,ignore
/// use railway::async_ext::sequence_spawned;
///
/// let users = sequence_spawned(ids.into_iter().map(fetch_user)).await;
/// ```
pub async fn sequence_spawned<T, Fut, I>(futures: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Fut>,
    Fut: Future<Output = Outcome<T>> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futures.into_iter().map(tokio::spawn).collect();
    let mut outcomes = Vec::with_capacity(handles.len());

    for handle in handles {
        match handle.await {
            Ok(outcome) => outcomes.push(outcome),
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(error) => outcomes.push(Outcome::failure(alloc::format!("{error}"))),
        }
    }

    sequence(outcomes)
}
