//! Fixed-arity view over several independently produced outcomes.
//!
//! [`combine`] packs up to ten outcomes into a [`Combined`] value. Its
//! `map`/`bind` (and their async twins) run a function over all success
//! values at once, and are defined through [`lift`]: for outcomes `a`, `b`
//! and `c`,
//!
//! ```text
//! combine((a, b, c)).map(f) == lift(f).apply(a).apply(b).apply(c).invoke(())
//! ```
//!
//! so every failing input contributes its errors, in input order, and `f` is
//! skipped.
//!
//! # Examples
//!
//! ```
//! use railway::{combine, Outcome};
//!
//! let name = Outcome::success("Ada");
//! let age = Outcome::success(36);
//!
//! let greeting = combine((name, age)).map(|name, age| format!("{name} ({age})"));
//! assert_eq!(greeting, Outcome::success("Ada (36)".to_string()));
//!
//! let broken = combine((Outcome::<&str>::failure("no name"), Outcome::<u32>::failure("no age")))
//!     .map(|name, age| format!("{name} ({age})"));
//! assert_eq!(broken.errors(), ["no name", "no age"]);
//! ```

#[cfg(feature = "async")]
use core::future::Future;

#[cfg(feature = "async")]
use crate::async_ext::{LiftFuture, SuccessFuture};
use crate::lift::{lift, lift_bind, Invoke, Merge};
#[cfg(feature = "async")]
use crate::lift::{lift_async, lift_bind_async};
use crate::Outcome;

/// A tuple of outcomes awaiting a function over all of them.
///
/// Created by [`combine`] or the [`combine!`](crate::combine!) macro.
#[must_use = "combined outcomes do nothing until mapped, bound or merged"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combined<O> {
    outcomes: O,
}

/// Packs a tuple of 1 to 10 outcomes for simultaneous mapping.
#[inline]
pub fn combine<O: Merge>(outcomes: O) -> Combined<O> {
    Combined { outcomes }
}

impl<O: Merge> Combined<O> {
    /// Merges into an outcome of the tuple of values, accumulating errors.
    ///
    /// ```
    /// use railway::{combine, Outcome};
    ///
    /// let pair = combine((Outcome::success(1), Outcome::success('x'))).merge();
    /// assert_eq!(pair, Outcome::success((1, 'x')));
    /// ```
    #[inline]
    pub fn merge(self) -> Outcome<O::Values> {
        self.outcomes.merge()
    }

    /// Returns the packed outcomes untouched.
    #[inline]
    pub fn into_inner(self) -> O {
        self.outcomes
    }
}

macro_rules! combined_impls {
    ($($ty:ident),+) => {
        impl<$($ty),+> Combined<($(Outcome<$ty>,)+)> {
            /// Calls `f` with every success value, or accumulates all errors.
            #[inline]
            pub fn map<Out, Func>(self, f: Func) -> Outcome<Out>
            where
                Func: FnOnce($($ty),+) -> Out,
            {
                lift(f).invoke(self.outcomes)
            }

            /// Like [`map`](Self::map) for a fallible `f`.
            #[inline]
            pub fn bind<Out, Func>(self, f: Func) -> Outcome<Out>
            where
                Func: FnOnce($($ty),+) -> Outcome<Out>,
            {
                lift_bind(f).invoke(self.outcomes)
            }

            /// Like [`map`](Self::map) for an `f` returning a future.
            ///
            /// When any input failed, `f` is not called and the returned
            /// future resolves immediately to the accumulated errors.
            #[cfg(feature = "async")]
            #[inline]
            pub fn map_async<Fut, Func>(self, f: Func) -> LiftFuture<SuccessFuture<Fut>, Fut::Output>
            where
                Func: FnOnce($($ty),+) -> Fut,
                Fut: Future,
            {
                lift_async(f).invoke(self.outcomes)
            }

            /// Like [`bind`](Self::bind) for an `f` returning a future.
            #[cfg(feature = "async")]
            #[inline]
            pub fn bind_async<Out, Fut, Func>(self, f: Func) -> LiftFuture<Fut, Out>
            where
                Func: FnOnce($($ty),+) -> Fut,
                Fut: Future<Output = Outcome<Out>>,
            {
                lift_bind_async(f).invoke(self.outcomes)
            }
        }
    };
}

combined_impls!(A);
combined_impls!(A, B);
combined_impls!(A, B, C);
combined_impls!(A, B, C, D);
combined_impls!(A, B, C, D, E);
combined_impls!(A, B, C, D, E, F);
combined_impls!(A, B, C, D, E, F, G);
combined_impls!(A, B, C, D, E, F, G, H);
combined_impls!(A, B, C, D, E, F, G, H, I);
combined_impls!(A, B, C, D, E, F, G, H, I, J);
