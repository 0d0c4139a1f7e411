use crate::types::alloc_type::String;
use crate::types::Errors;
use core::fmt::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Message carried by a default-constructed [`Outcome`].
pub const NOT_INITIALIZED: &str = "not initialized";

/// Two-track value: either a success carrying `T` or a failure carrying [`Errors`].
///
/// `Outcome<T>` is the rail every combinator in this crate runs on. The unit
/// form `Outcome<()>` stands for operations that only report whether they
/// succeeded.
///
/// Two composition laws coexist and stay distinct:
///
/// - **short-circuit**: [`map`](Self::map) and [`bind`](Self::bind) stop at the
///   first failure and never call their continuation on it.
/// - **accumulate**: [`zip`](Self::zip), [`sequence`](crate::sequence),
///   [`combine`](crate::combine) and [`lift`](crate::lift) look at every input
///   and concatenate the errors of all failing ones, in input order.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` implements `Serialize` and `Deserialize`
/// when `T` does.
///
/// # Examples
///
/// ```
/// use railway::Outcome;
///
/// let parsed = Outcome::success(1)
///     .map(|x| x + 1)
///     .map(|x| x + 1);
/// assert_eq!(parsed, Outcome::success(3));
///
/// let failed = Outcome::<i32>::failure("e").map(|x| x + 1);
/// assert_eq!(failed.errors(), ["e"]);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T> {
    Success(T),
    Failure(Errors),
}

impl<T> Default for Outcome<T> {
    /// A default outcome is a failure with the single message [`NOT_INITIALIZED`].
    ///
    /// ```
    /// use railway::{Outcome, NOT_INITIALIZED};
    ///
    /// let outcome = Outcome::<u8>::default();
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.errors(), [NOT_INITIALIZED]);
    /// ```
    fn default() -> Self {
        Self::failure(NOT_INITIALIZED)
    }
}

impl Outcome<()> {
    /// Creates a successful unit outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert!(Outcome::unit().is_success());
    /// ```
    #[inline]
    pub fn unit() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    /// Creates a successful outcome.
    ///
    /// # Arguments
    ///
    /// * `value` - The success value to wrap
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::success(42);
    /// assert_eq!(outcome.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome from a single message.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<()>::failure("missing field");
    /// assert!(outcome.is_failure());
    /// assert_eq!(outcome.errors(), ["missing field"]);
    /// ```
    #[inline]
    pub fn failure<S: Into<String>>(message: S) -> Self {
        Self::Failure(core::iter::once(message).collect())
    }

    /// Creates a failed outcome from zero or more messages.
    ///
    /// An empty iterator still produces a failure; it simply reports no
    /// messages.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let outcome = Outcome::<()>::failure_many(["missing", "invalid"]);
    /// assert_eq!(outcome.errors().len(), 2);
    /// ```
    #[inline]
    pub fn failure_many<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Failure(messages.into_iter().collect())
    }

    /// Returns `true` on the success track.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` on the failure track.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the failure messages in order; empty on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert!(Outcome::success(1).errors().is_empty());
    /// assert_eq!(Outcome::<i32>::failure("boom").errors(), ["boom"]);
    /// ```
    #[must_use]
    #[inline]
    pub fn errors(&self) -> &[String] {
        match self {
            Self::Success(_) => &[],
            Self::Failure(errors) => errors.as_slice(),
        }
    }

    /// Borrows the value on success.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the value, if successful.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Extracts the errors, if failed.
    #[must_use]
    #[inline]
    pub fn into_errors(self) -> Option<Errors> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Converts `&Outcome<T>` into `Outcome<&T>`, cloning the errors.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&T> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(errors) => Outcome::Failure(errors.clone()),
        }
    }

    /// Maps the success value using `f`.
    ///
    /// On failure the errors are propagated unchanged and `f` is never called.
    /// A function returning `()` collapses the outcome to the unit form.
    ///
    /// # Arguments
    ///
    /// * `f` - A function that transforms the success value from type `T` to type `U`
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let doubled = Outcome::success(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), Some(42));
    ///
    /// let unit: Outcome<()> = Outcome::success(21).map(|_| ());
    /// assert!(unit.is_success());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// On success the outcome of `f` is returned as is; on failure `f` is
    /// skipped and the original errors are returned.
    ///
    /// # Arguments
    ///
    /// * `f` - Function producing the next step
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32> {
    ///     if input % 2 == 0 {
    ///         Outcome::success(input)
    ///     } else {
    ///         Outcome::failure("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::success(4).bind(parse_even), Outcome::success(4));
    /// assert_eq!(Outcome::success(3).bind(parse_even).errors(), ["not even"]);
    /// ```
    #[inline]
    pub fn bind<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(errors) => Outcome::Failure(errors),
        }
    }

    /// Rewrites every failure message, preserving order and count.
    ///
    /// Successes pass through untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let loud = Outcome::<()>::failure("error").map_error(|e| e.to_uppercase());
    /// assert_eq!(loud.errors(), ["ERROR"]);
    /// ```
    #[inline]
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => Self::Failure(errors.map(f)),
        }
    }

    /// Discards the success value, keeping the track and the errors.
    #[inline]
    pub fn ignore(self) -> Outcome<()> {
        self.map(|_| ())
    }

    /// Fails with `message` when `predicate` rejects the success value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let age = Outcome::success(-3).ensure(|age| *age >= 0, "age is negative");
    /// assert_eq!(age.errors(), ["age is negative"]);
    /// ```
    #[inline]
    pub fn ensure<P, S>(self, predicate: P, message: S) -> Self
    where
        P: FnOnce(&T) -> bool,
        S: Into<String>,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::failure(message)
                }
            }
            failure => failure,
        }
    }

    /// Calls `f` with a reference to the success value.
    #[inline]
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the errors of a failure.
    #[inline]
    pub fn inspect_failure<F>(self, f: F) -> Self
    where
        F: FnOnce(&Errors),
    {
        if let Self::Failure(errors) = &self {
            f(errors);
        }
        self
    }

    /// Calls `op` on failure, otherwise returns the success unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let recovered = Outcome::<i32>::failure("error").or_else(|_errors| Outcome::success(0));
    /// assert_eq!(recovered, Outcome::success(0));
    /// ```
    #[inline]
    pub fn or_else<F>(self, op: F) -> Self
    where
        F: FnOnce(Errors) -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(errors) => op(errors),
        }
    }

    /// Returns the success value or `default`.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the errors.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(Errors) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(errors) => f(errors),
        }
    }

    /// Folds both tracks into a single value.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let report = Outcome::<u32>::failure_many(["a", "b"])
    ///     .fold(|value| format!("ok: {value}"), |errors| format!("failed: {errors}"));
    /// assert_eq!(report, "failed: a; b");
    /// ```
    #[inline]
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(Errors) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(errors) => on_failure(errors),
        }
    }

    /// Pairs two outcomes, accumulating the errors of both.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let both = Outcome::success(42).zip(Outcome::success("x"));
    /// assert_eq!(both.into_value(), Some((42, "x")));
    ///
    /// let neither = Outcome::<i32>::failure("first").zip(Outcome::<i32>::failure("second"));
    /// assert_eq!(neither.errors(), ["first", "second"]);
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success((a, b)),
            (Outcome::Failure(e), Outcome::Success(_)) => Outcome::Failure(e),
            (Outcome::Success(_), Outcome::Failure(e)) => Outcome::Failure(e),
            (Outcome::Failure(mut e1), Outcome::Failure(e2)) => {
                e1.append(e2);
                Outcome::Failure(e1)
            }
        }
    }

    /// Converts into a standard `Result`, keeping every message on the error side.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert_eq!(Outcome::success(42).into_result(), Ok(42));
    /// assert!(Outcome::<i32>::failure("error").into_result().is_err());
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Errors> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(errors) => Err(errors),
        }
    }

    /// Wraps a standard `Result`, rendering its error with `Display`.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// let parsed = Outcome::from_result("12x".parse::<u8>());
    /// assert_eq!(parsed.errors(), ["invalid digit found in string"]);
    /// ```
    #[inline]
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::failure(alloc::format!("{error}")),
        }
    }

    /// Turns `Some` into a success and `None` into a failure with `message`.
    #[inline]
    pub fn from_option<S: Into<String>>(option: Option<T>, message: S) -> Self {
        match option {
            Some(value) => Self::Success(value),
            None => Self::failure(message),
        }
    }
}

impl<T> Outcome<Outcome<T>> {
    /// Removes one level of nesting.
    ///
    /// Succeeds only if both levels succeed. An outer failure reports the outer
    /// errors, otherwise the inner errors are reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert_eq!(Outcome::success(Outcome::success(1)).flatten(), Outcome::success(1));
    ///
    /// let inner = Outcome::success(Outcome::<i32>::failure("inner"));
    /// assert_eq!(inner.flatten().errors(), ["inner"]);
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T> {
        self.bind(|inner| inner)
    }
}

impl<T> From<Outcome<T>> for Result<T, Errors> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}
