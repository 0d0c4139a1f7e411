//! Future adapters behind [`FutureOutcomeExt`](super::FutureOutcomeExt).
//!
//! Each adapter awaits its source future first and then applies the same
//! combinator as the synchronous [`Outcome`] API, so the short-circuit law is
//! identical: a continuation never runs on a failed source.

use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};

use futures_core::future::FusedFuture;
use pin_project_lite::pin_project;

use crate::types::alloc_type::String;
use crate::Outcome;

const POLLED_AFTER_COMPLETION: &str = "outcome future polled after completion; this is a bug";

pin_project! {
    /// Future for [`map_outcome`](super::FutureOutcomeExt::map_outcome).
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcome<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapOutcome<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, U> Future for MapOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = ready!(this.future.poll(cx));
        let f = this.f.take().expect(POLLED_AFTER_COMPLETION);
        Poll::Ready(outcome.map(f))
    }
}

impl<Fut, F, T, U> FusedFuture for MapOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> U,
{
    fn is_terminated(&self) -> bool {
        self.f.is_none()
    }
}

pin_project! {
    /// Future for [`bind_outcome`](super::FutureOutcomeExt::bind_outcome).
    #[must_use = "futures do nothing unless polled"]
    pub struct BindOutcome<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> BindOutcome<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T, U> Future for BindOutcome<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Outcome<U>,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = ready!(this.future.poll(cx));
        let f = this.f.take().expect(POLLED_AFTER_COMPLETION);
        Poll::Ready(outcome.bind(f))
    }
}

pin_project! {
    /// Future for [`map_outcome_error`](super::FutureOutcomeExt::map_outcome_error).
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcomeError<Fut, F> {
        #[pin]
        future: Fut,
        f: Option<F>,
    }
}

impl<Fut, F> MapOutcomeError<Fut, F> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self { future, f: Some(f) }
    }
}

impl<Fut, F, T> Future for MapOutcomeError<Fut, F>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnMut(String) -> String,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        let outcome = ready!(this.future.poll(cx));
        let f = this.f.take().expect(POLLED_AFTER_COMPLETION);
        Poll::Ready(outcome.map_error(f))
    }
}

pin_project! {
    /// Future for [`ignore_outcome`](super::FutureOutcomeExt::ignore_outcome).
    #[must_use = "futures do nothing unless polled"]
    pub struct IgnoreOutcome<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> IgnoreOutcome<Fut> {
    #[inline]
    pub(crate) fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T> Future for IgnoreOutcome<Fut>
where
    Fut: Future<Output = Outcome<T>>,
{
    type Output = Outcome<()>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::ignore)
    }
}

pin_project! {
    /// Future for [`flatten_outcome`](super::FutureOutcomeExt::flatten_outcome).
    #[must_use = "futures do nothing unless polled"]
    pub struct FlattenOutcome<Fut> {
        #[pin]
        future: Fut,
    }
}

impl<Fut> FlattenOutcome<Fut> {
    #[inline]
    pub(crate) fn new(future: Fut) -> Self {
        Self { future }
    }
}

impl<Fut, T> Future for FlattenOutcome<Fut>
where
    Fut: Future<Output = Outcome<Outcome<T>>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().future.poll(cx).map(Outcome::flatten)
    }
}

pin_project! {
    #[project = ChainProj]
    enum Chain<Fut, F, Next> {
        Source {
            #[pin]
            source: Fut,
            f: Option<F>,
        },
        Continuation {
            #[pin]
            next: Next,
        },
        Done,
    }
}

impl<Fut, F, Next> Chain<Fut, F, Next> {
    fn new(source: Fut, f: F) -> Self {
        Chain::Source { source, f: Some(f) }
    }

    /// Awaits the source, then the continuation built from its value.
    ///
    /// A failed source resolves to its failure without calling `f`.
    fn poll_chain<T>(
        mut self: Pin<&mut Self>,
        cx: &mut Context<'_>,
    ) -> Poll<Outcome<Next::Output>>
    where
        Fut: Future<Output = Outcome<T>>,
        F: FnOnce(T) -> Next,
        Next: Future,
    {
        loop {
            match self.as_mut().project() {
                ChainProj::Source { source, f } => {
                    let outcome = ready!(source.poll(cx));
                    let f = f.take().expect(POLLED_AFTER_COMPLETION);
                    match outcome {
                        Outcome::Success(value) => {
                            let next = f(value);
                            self.set(Chain::Continuation { next });
                        }
                        Outcome::Failure(errors) => {
                            self.set(Chain::Done);
                            return Poll::Ready(Outcome::Failure(errors));
                        }
                    }
                }
                ChainProj::Continuation { next } => {
                    let output = ready!(next.poll(cx));
                    self.set(Chain::Done);
                    return Poll::Ready(Outcome::Success(output));
                }
                ChainProj::Done => panic!("{}", POLLED_AFTER_COMPLETION),
            }
        }
    }
}

pin_project! {
    /// Future for [`map_outcome_async`](super::FutureOutcomeExt::map_outcome_async).
    #[must_use = "futures do nothing unless polled"]
    pub struct MapOutcomeAsync<Fut, F, Next> {
        #[pin]
        chain: Chain<Fut, F, Next>,
    }
}

impl<Fut, F, Next> MapOutcomeAsync<Fut, F, Next> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self {
            chain: Chain::new(future, f),
        }
    }
}

impl<Fut, F, Next, T> Future for MapOutcomeAsync<Fut, F, Next>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Next,
    Next: Future,
{
    type Output = Outcome<Next::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().chain.poll_chain(cx)
    }
}

impl<Fut, F, Next, T> FusedFuture for MapOutcomeAsync<Fut, F, Next>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Next,
    Next: Future,
{
    fn is_terminated(&self) -> bool {
        matches!(self.chain, Chain::Done)
    }
}

pin_project! {
    /// Future for [`bind_outcome_async`](super::FutureOutcomeExt::bind_outcome_async).
    #[must_use = "futures do nothing unless polled"]
    pub struct BindOutcomeAsync<Fut, F, Next> {
        #[pin]
        chain: Chain<Fut, F, Next>,
    }
}

impl<Fut, F, Next> BindOutcomeAsync<Fut, F, Next> {
    #[inline]
    pub(crate) fn new(future: Fut, f: F) -> Self {
        Self {
            chain: Chain::new(future, f),
        }
    }
}

impl<Fut, F, Next, T, U> Future for BindOutcomeAsync<Fut, F, Next>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Next,
    Next: Future<Output = Outcome<U>>,
{
    type Output = Outcome<U>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.project().chain.poll_chain(cx).map(Outcome::flatten)
    }
}

impl<Fut, F, Next, T, U> FusedFuture for BindOutcomeAsync<Fut, F, Next>
where
    Fut: Future<Output = Outcome<T>>,
    F: FnOnce(T) -> Next,
    Next: Future<Output = Outcome<U>>,
{
    fn is_terminated(&self) -> bool {
        matches!(self.chain, Chain::Done)
    }
}
