//! Lifting plain functions onto the outcome rail, and applying them one
//! argument at a time.
//!
//! [`lift`] takes a function of arity n over plain values and returns a
//! [`Lifted`] function over `n` outcomes. Invoking it merges every argument
//! first, accumulating the errors of all failing arguments, and only calls the
//! underlying function when all of them succeeded.
//!
//! [`Lifted::apply`] supplies the first remaining argument and returns an
//! [`Applied`] function of arity n-1. Nothing is evaluated until the chain is
//! finally [invoked](Invoke::invoke), so a failing argument is carried along
//! lazily and surfaces only then.
//!
//! Arities 1 through 10 are supported.
//!
//! # Examples
//!
//! ```
//! use railway::{lift, Invoke, Outcome};
//!
//! let area = lift(|width: u32, height: u32| width * height);
//!
//! let ok = area.clone().invoke((Outcome::success(3), Outcome::success(4)));
//! assert_eq!(ok, Outcome::success(12));
//!
//! let bad = area
//!     .apply(Outcome::<u32>::failure("width missing"))
//!     .apply(Outcome::<u32>::failure("height missing"))
//!     .invoke(());
//! assert_eq!(bad.errors(), ["width missing", "height missing"]);
//! ```

mod arity;

pub use arity::{Function, Merge, Prepend};

use crate::Outcome;

/// Calls a lifted function with a tuple of its remaining outcome arguments.
///
/// Implemented by [`Lifted`] for the full argument tuple and by [`Applied`]
/// for whatever is left after partial application. A fully applied chain is
/// invoked with `()`.
pub trait Invoke<Args> {
    /// What invoking produces: `Outcome<U>` for synchronous functions, a
    /// future yielding `Outcome<U>` for asynchronous ones.
    type Output;

    fn invoke(self, args: Args) -> Self::Output;
}

/// Adapter for plain functions whose return value is wrapped in a success.
#[derive(Clone, Copy)]
pub struct Mapping<F>(F);

/// Adapter for functions that already return an [`Outcome`].
#[derive(Clone, Copy)]
pub struct Binding<F>(F);

/// Adapter for functions returning a future of a plain value.
#[cfg(feature = "async")]
#[derive(Clone, Copy)]
pub struct MappingAsync<F>(F);

/// Adapter for functions returning a future of an [`Outcome`].
#[cfg(feature = "async")]
#[derive(Clone, Copy)]
pub struct BindingAsync<F>(F);

/// A function whose arguments are outcomes.
///
/// Built by [`lift`], [`lift_bind`], [`lift_async`] or [`lift_bind_async`].
#[must_use = "lifted functions do nothing until invoked"]
#[derive(Clone, Copy)]
pub struct Lifted<G> {
    function: G,
}

/// A lifted function with its first remaining argument supplied.
///
/// The argument is stored as is; a failure is only reported once the chain
/// is invoked.
#[must_use = "applied functions do nothing until invoked"]
#[derive(Clone)]
pub struct Applied<L, T> {
    lifted: L,
    first: Outcome<T>,
}

/// Lifts a plain function of arity n into a function of n outcomes.
///
/// The return value of `f` is wrapped in [`Outcome::Success`].
#[inline]
pub fn lift<F>(f: F) -> Lifted<Mapping<F>> {
    Lifted {
        function: Mapping(f),
    }
}

/// Lifts a function returning an [`Outcome`] into a function of n outcomes.
///
/// The outcome returned by `f` is passed through unchanged.
///
/// # Examples
///
/// ```
/// use railway::{lift_bind, Invoke, Outcome};
///
/// let divide = lift_bind(|a: i32, b: i32| {
///     if b == 0 {
///         Outcome::failure("division by zero")
///     } else {
///         Outcome::success(a / b)
///     }
/// });
///
/// let zero = divide.invoke((Outcome::success(1), Outcome::success(0)));
/// assert_eq!(zero.errors(), ["division by zero"]);
/// ```
#[inline]
pub fn lift_bind<F>(f: F) -> Lifted<Binding<F>> {
    Lifted {
        function: Binding(f),
    }
}

/// Lifts a function returning a future into a function of n outcomes that
/// returns a future of an outcome.
///
/// When any argument failed the function is not called and the returned
/// future is immediately ready with the accumulated errors.
#[cfg(feature = "async")]
#[inline]
pub fn lift_async<F>(f: F) -> Lifted<MappingAsync<F>> {
    Lifted {
        function: MappingAsync(f),
    }
}

/// Lifts a function returning a future of an [`Outcome`].
#[cfg(feature = "async")]
#[inline]
pub fn lift_bind_async<F>(f: F) -> Lifted<BindingAsync<F>> {
    Lifted {
        function: BindingAsync(f),
    }
}

impl<G> Lifted<G> {
    /// Supplies the first argument as an outcome.
    #[inline]
    pub fn apply<T>(self, arg: Outcome<T>) -> Applied<Self, T> {
        Applied {
            lifted: self,
            first: arg,
        }
    }

    /// Supplies the first argument as a plain value.
    #[inline]
    pub fn apply_value<T>(self, value: T) -> Applied<Self, T> {
        self.apply(Outcome::Success(value))
    }
}

impl<L, T> Applied<L, T> {
    /// Supplies the next argument as an outcome.
    #[inline]
    pub fn apply<U>(self, arg: Outcome<U>) -> Applied<Self, U> {
        Applied {
            lifted: self,
            first: arg,
        }
    }

    /// Supplies the next argument as a plain value.
    #[inline]
    pub fn apply_value<U>(self, value: U) -> Applied<Self, U> {
        self.apply(Outcome::Success(value))
    }
}

impl<G, Args> Invoke<Args> for Lifted<G>
where
    Args: Merge,
    G: Function<Args::Values>,
{
    type Output = <G as Function<Args::Values>>::Output;

    fn invoke(self, args: Args) -> Self::Output {
        match args.merge() {
            Outcome::Success(values) => self.function.call(values),
            Outcome::Failure(errors) => <G as Function<Args::Values>>::skip(errors),
        }
    }
}

impl<L, T, Rest> Invoke<Rest> for Applied<L, T>
where
    Rest: Prepend<Outcome<T>>,
    L: Invoke<Rest::Output>,
{
    type Output = <L as Invoke<Rest::Output>>::Output;

    #[inline]
    fn invoke(self, rest: Rest) -> Self::Output {
        self.lifted.invoke(rest.prepend(self.first))
    }
}
