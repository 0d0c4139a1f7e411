//! Futures returned by asynchronously lifted functions.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::Errors;
use crate::Outcome;

pin_project! {
    /// Wraps the output of a future in [`Outcome::Success`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railway::async_ext::SuccessFuture;
    /// use railway::Outcome;
    ///
    /// async fn example() {
    ///     let outcome = SuccessFuture::new(async { 7 }).await;
    ///     assert_eq!(outcome, Outcome::success(7));
    /// }
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct SuccessFuture<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> SuccessFuture<Fut> {
    #[inline]
    pub fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut: Future> Future for SuccessFuture<Fut> {
    type Output = Outcome<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::Success)
    }
}

impl<Fut: FusedFuture> FusedFuture for SuccessFuture<Fut> {
    fn is_terminated(&self) -> bool {
        self.future.is_terminated()
    }
}

pin_project! {
    /// Future returned when invoking an asynchronously lifted function.
    ///
    /// If every argument succeeded it drives the function's future; otherwise
    /// the function was never called and the future resolves immediately to
    /// the accumulated failure.
    #[must_use = "futures do nothing unless polled"]
    pub struct LiftFuture<Fut, T> {
        #[pin]
        state: LiftState<Fut, T>,
    }
}

pin_project! {
    #[project = LiftStateProj]
    enum LiftState<Fut, T> {
        Running {
            #[pin]
            future: Fut,
        },
        Skipped {
            outcome: Option<Outcome<T>>,
        },
    }
}

impl<Fut, T> LiftFuture<Fut, T> {
    #[inline]
    pub(crate) fn running(future: Fut) -> Self {
        Self {
            state: LiftState::Running { future },
        }
    }

    #[inline]
    pub(crate) fn skipped(errors: Errors) -> Self {
        Self {
            state: LiftState::Skipped {
                outcome: Some(Outcome::Failure(errors)),
            },
        }
    }
}

impl<Fut, T> Future for LiftFuture<Fut, T>
where
    Fut: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project().state.project() {
            LiftStateProj::Running { future } => future.poll(cx),
            LiftStateProj::Skipped { outcome } => Poll::Ready(
                outcome
                    .take()
                    .expect("LiftFuture polled after completion; this is a bug"),
            ),
        }
    }
}

impl<Fut, T> FusedFuture for LiftFuture<Fut, T>
where
    Fut: FusedFuture<Output = Outcome<T>>,
{
    fn is_terminated(&self) -> bool {
        match &self.state {
            LiftState::Running { future } => future.is_terminated(),
            LiftState::Skipped { outcome } => outcome.is_none(),
        }
    }
}
