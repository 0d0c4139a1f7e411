//! Tracing integration.
//!
//! Attaches span information to failure messages and reports failures as
//! `tracing` events. Nothing is logged unless the caller asks for it.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! railway = { version = "0.1", features = ["tracing"] }
//! ```

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;
use tracing::Span;

use crate::traits::Railway;
use crate::types::alloc_type::String;
use crate::Outcome;

/// Extension trait for outcomes that adds span context to failure messages.
pub trait OutcomeSpanExt: Sized {
    /// Prefixes every failure message with the current span's name.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use railway::async_ext::OutcomeSpanExt;
    ///
    /// let span = tracing::info_span!("load_config");
    /// let _guard = span.enter();
    /// let outcome = read_config().with_current_span();
    /// // failure messages now read "in span 'load_config': ..."
    /// ```
    fn with_current_span(self) -> Self {
        self.with_span(&Span::current())
    }

    /// Prefixes every failure message with the name of `span`.
    fn with_span(self, span: &Span) -> Self;
}

impl<T> OutcomeSpanExt for Outcome<T> {
    fn with_span(self, span: &Span) -> Self {
        if self.is_success() {
            return self;
        }
        let name = span_name(span);
        self.map_error(|message| alloc::format!("in span '{name}': {message}"))
    }
}

/// Extension trait for futures of outcomes that adds span context on failure.
pub trait FutureSpanExt<T>: Future<Output = Outcome<T>> + Sized {
    /// Captures the current span when called and prefixes its name to every
    /// failure message once the future resolves.
    fn with_span_context(self) -> SpanContextFuture<Self> {
        SpanContextFuture {
            inner: self,
            span: Span::current(),
        }
    }

    /// Like [`with_span_context`](Self::with_span_context), with an explicit span.
    fn with_span(self, span: Span) -> SpanContextFuture<Self> {
        SpanContextFuture { inner: self, span }
    }
}

impl<F, T> FutureSpanExt<T> for F where F: Future<Output = Outcome<T>> {}

pin_project! {
    /// Future wrapper that adds span context to failure messages.
    ///
    /// Created by [`FutureSpanExt::with_span_context`] or [`FutureSpanExt::with_span`].
    #[must_use = "futures do nothing unless polled"]
    pub struct SpanContextFuture<F> {
        #[pin]
        inner: F,
        span: Span,
    }
}

impl<F, T> Future for SpanContextFuture<F>
where
    F: Future<Output = Outcome<T>>,
{
    type Output = Outcome<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        this.inner
            .poll(cx)
            .map(|outcome| outcome.with_span(this.span))
    }
}

/// Emits one `WARN` event per failure message of `rail`.
///
/// Returns `true` if anything was reported.
///
/// # Example
///
/// ```rust,ignore
/// use railway::async_ext::trace_failure;
///
/// let outcome = validate(&order);
/// trace_failure(&outcome);
/// ```
pub fn trace_failure<R: Railway>(rail: &R) -> bool {
    if rail.is_success() {
        return false;
    }
    let errors = rail.errors();
    for (index, message) in errors.iter().enumerate() {
        tracing::warn!(index, total = errors.len(), error = %message, "outcome failed");
    }
    true
}

fn span_name(span: &Span) -> String {
    String::from(span.metadata().map(|m| m.name()).unwrap_or("unknown"))
}
