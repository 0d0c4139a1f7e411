//! Tuple machinery behind [`lift`](super::lift), instantiated for arities 1 to 10.
//!
//! Every arity follows one pattern: merge the outcome arguments into an
//! outcome of a tuple, accumulating errors; then hand the tuple to the
//! underlying function, unwrapping it positionally. The macros below stamp
//! that pattern out per arity so no body is written twice by hand.

#[cfg(feature = "async")]
use core::future::Future;

#[cfg(feature = "async")]
use super::{BindingAsync, MappingAsync};
use super::{Binding, Mapping};
#[cfg(feature = "async")]
use crate::async_ext::{LiftFuture, SuccessFuture};
use crate::types::Errors;
use crate::Outcome;

/// A tuple of outcomes that can be merged into an outcome of a tuple.
///
/// Merging never short-circuits: every element is inspected and the errors
/// of all failing elements are concatenated in position order.
///
/// # Examples
///
/// ```
/// use railway::{Merge, Outcome};
///
/// let merged = (Outcome::success(1), Outcome::success("a")).merge();
/// assert_eq!(merged, Outcome::success((1, "a")));
///
/// let failed = (
///     Outcome::<i32>::failure("first"),
///     Outcome::success("a"),
///     Outcome::<bool>::failure("third"),
/// )
///     .merge();
/// assert_eq!(failed.errors(), ["first", "third"]);
/// ```
pub trait Merge {
    /// The tuple of success values.
    type Values;

    fn merge(self) -> Outcome<Self::Values>;
}

/// Tuples that can grow by one element at the front.
pub trait Prepend<Head> {
    type Output;

    fn prepend(self, head: Head) -> Self::Output;
}

/// A function called with a tuple of plain arguments.
///
/// `call` runs the function once every argument is available; `skip` builds
/// the result reported when the arguments failed to merge, without running
/// anything.
pub trait Function<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;

    fn skip(errors: Errors) -> Self::Output;
}

macro_rules! prepend_impls {
    ($($arg:ident: $ty:ident),*) => {
        impl<Head, $($ty),*> Prepend<Head> for ($($ty,)*) {
            type Output = (Head, $($ty,)*);

            #[inline]
            fn prepend(self, head: Head) -> Self::Output {
                let ($($arg,)*) = self;
                (head, $($arg,)*)
            }
        }
    };
}

macro_rules! arity_impls {
    ($($arg:ident: $ty:ident),+) => {
        impl<$($ty),+> Merge for ($(Outcome<$ty>,)+) {
            type Values = ($($ty,)+);

            fn merge(self) -> Outcome<Self::Values> {
                let ($($arg,)+) = self;
                let mut errors = Errors::new();
                $(
                    let $arg = match $arg {
                        Outcome::Success(value) => Some(value),
                        Outcome::Failure(failure) => {
                            errors.append(failure);
                            None
                        }
                    };
                )+
                match ($($arg,)+) {
                    ($(Some($arg),)+) => Outcome::Success(($($arg,)+)),
                    _ => Outcome::Failure(errors),
                }
            }
        }

        impl<Func, Out, $($ty),+> Function<($($ty,)+)> for Mapping<Func>
        where
            Func: FnOnce($($ty),+) -> Out,
        {
            type Output = Outcome<Out>;

            #[inline]
            fn call(self, ($($arg,)+): ($($ty,)+)) -> Self::Output {
                Outcome::Success((self.0)($($arg),+))
            }

            #[inline]
            fn skip(errors: Errors) -> Self::Output {
                Outcome::Failure(errors)
            }
        }

        impl<Func, Out, $($ty),+> Function<($($ty,)+)> for Binding<Func>
        where
            Func: FnOnce($($ty),+) -> Outcome<Out>,
        {
            type Output = Outcome<Out>;

            #[inline]
            fn call(self, ($($arg,)+): ($($ty,)+)) -> Self::Output {
                (self.0)($($arg),+)
            }

            #[inline]
            fn skip(errors: Errors) -> Self::Output {
                Outcome::Failure(errors)
            }
        }

        #[cfg(feature = "async")]
        impl<Func, Fut, $($ty),+> Function<($($ty,)+)> for MappingAsync<Func>
        where
            Func: FnOnce($($ty),+) -> Fut,
            Fut: Future,
        {
            type Output = LiftFuture<SuccessFuture<Fut>, Fut::Output>;

            #[inline]
            fn call(self, ($($arg,)+): ($($ty,)+)) -> Self::Output {
                LiftFuture::running(SuccessFuture::new((self.0)($($arg),+)))
            }

            #[inline]
            fn skip(errors: Errors) -> Self::Output {
                LiftFuture::skipped(errors)
            }
        }

        #[cfg(feature = "async")]
        impl<Func, Fut, Out, $($ty),+> Function<($($ty,)+)> for BindingAsync<Func>
        where
            Func: FnOnce($($ty),+) -> Fut,
            Fut: Future<Output = Outcome<Out>>,
        {
            type Output = LiftFuture<Fut, Out>;

            #[inline]
            fn call(self, ($($arg,)+): ($($ty,)+)) -> Self::Output {
                LiftFuture::running((self.0)($($arg),+))
            }

            #[inline]
            fn skip(errors: Errors) -> Self::Output {
                LiftFuture::skipped(errors)
            }
        }
    };
}

prepend_impls!();
prepend_impls!(a: A);
prepend_impls!(a: A, b: B);
prepend_impls!(a: A, b: B, c: C);
prepend_impls!(a: A, b: B, c: C, d: D);
prepend_impls!(a: A, b: B, c: C, d: D, e: E);
prepend_impls!(a: A, b: B, c: C, d: D, e: E, f: F);
prepend_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
prepend_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
prepend_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);

arity_impls!(a: A);
arity_impls!(a: A, b: B);
arity_impls!(a: A, b: B, c: C);
arity_impls!(a: A, b: B, c: C, d: D);
arity_impls!(a: A, b: B, c: C, d: D, e: E);
arity_impls!(a: A, b: B, c: C, d: D, e: E, f: F);
arity_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
arity_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);
arity_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I);
arity_impls!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H, i: I, j: J);
