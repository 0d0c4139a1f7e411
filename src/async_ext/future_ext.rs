//! Extension trait for `Future<Output = Outcome<T>>`.
//!
//! Mirrors the synchronous [`Outcome`] combinators for futures, with both
//! synchronous and asynchronous continuations.

use core::future::Future;

use crate::types::alloc_type::String;
use crate::Outcome;

use super::outcome_future::{
    BindOutcome, BindOutcomeAsync, FlattenOutcome, IgnoreOutcome, MapOutcome, MapOutcomeAsync,
    MapOutcomeError,
};

/// Combinators for futures that resolve to an [`Outcome`].
///
/// Every method awaits the source first and then behaves exactly like its
/// synchronous counterpart: continuations run strictly after the source
/// resolved, and never on a failure.
///
/// | Source | Continuation | Method |
/// |--------|--------------|--------|
/// | future | sync | [`map_outcome`](Self::map_outcome), [`bind_outcome`](Self::bind_outcome) |
/// | future | future | [`map_outcome_async`](Self::map_outcome_async), [`bind_outcome_async`](Self::bind_outcome_async) |
/// | sync | future | [`Outcome::map_async`], [`Outcome::bind_async`] |
///
/// # Examples
///
/// ```rust
/// use railway::prelude_async::*;
///
/// async fn load(id: u32) -> Outcome<u32> {
///     if id == 0 {
///         Outcome::failure("no such user")
///     } else {
///         Outcome::success(id)
///     }
/// }
///
/// async fn example() {
///     let name = load(7)
///         .map_outcome(|id| id * 10)
///         .bind_outcome_async(|score| async move { Outcome::success(format!("score {score}")) })
///         .await;
///     assert_eq!(name, Outcome::success("score 70".to_string()));
/// }
/// ```
pub trait FutureOutcomeExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Maps the success value once the future resolves.
    #[inline]
    fn map_outcome<U, F>(self, f: F) -> MapOutcome<Self, F>
    where
        F: FnOnce(T) -> U,
    {
        MapOutcome::new(self, f)
    }

    /// Chains a fallible step once the future resolves.
    #[inline]
    fn bind_outcome<U, F>(self, f: F) -> BindOutcome<Self, F>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        BindOutcome::new(self, f)
    }

    /// Rewrites every failure message once the future resolves.
    #[inline]
    fn map_outcome_error<F>(self, f: F) -> MapOutcomeError<Self, F>
    where
        F: FnMut(String) -> String,
    {
        MapOutcomeError::new(self, f)
    }

    /// Discards the success value once the future resolves.
    #[inline]
    fn ignore_outcome(self) -> IgnoreOutcome<Self> {
        IgnoreOutcome::new(self)
    }

    /// Removes one level of outcome nesting once the future resolves.
    ///
    /// The returned future only implements `Future` when `T` is itself an
    /// `Outcome`.
    #[inline]
    fn flatten_outcome(self) -> FlattenOutcome<Self> {
        FlattenOutcome::new(self)
    }

    /// Maps the success value with an asynchronous function.
    #[inline]
    fn map_outcome_async<F, Next>(self, f: F) -> MapOutcomeAsync<Self, F, Next>
    where
        F: FnOnce(T) -> Next,
        Next: Future,
    {
        MapOutcomeAsync::new(self, f)
    }

    /// Chains an asynchronous fallible step.
    #[inline]
    fn bind_outcome_async<U, F, Next>(self, f: F) -> BindOutcomeAsync<Self, F, Next>
    where
        F: FnOnce(T) -> Next,
        Next: Future<Output = Outcome<U>>,
    {
        BindOutcomeAsync::new(self, f)
    }
}

impl<Fut, T> FutureOutcomeExt<T> for Fut where Fut: Future<Output = Outcome<T>> {}

impl<T> Outcome<T> {
    /// Maps the success value with an asynchronous function.
    ///
    /// On failure `f` is never called and the returned future resolves to
    /// the original errors.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::Outcome;
    ///
    /// async fn example() {
    ///     let doubled = Outcome::success(21).map_async(|x| async move { x * 2 }).await;
    ///     assert_eq!(doubled, Outcome::success(42));
    /// }
    /// ```
    pub async fn map_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value).await),
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains an asynchronous fallible step.
    ///
    /// On failure `f` is never called.
    pub async fn bind_async<U, F, Fut>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Outcome<U>>,
    {
        match self {
            Outcome::Success(value) => f(value).await,
            Outcome::Failure(errors) => Outcome::Failure(errors),
        }
    }
}
