//! Moving foreign fallible values onto the outcome rail.

use core::fmt::Display;

use crate::types::alloc_type::String;
use crate::Outcome;

/// Converts a `Result` or an `Option` into an [`Outcome`].
///
/// # Examples
///
/// ```
/// use railway::traits::IntoOutcome;
/// use railway::Outcome;
///
/// let port = "80".parse::<u16>().into_outcome();
/// assert_eq!(port, Outcome::success(80));
///
/// let missing = None::<u16>.into_outcome_or("port not set");
/// assert_eq!(missing.errors(), ["port not set"]);
/// ```
pub trait IntoOutcome<T> {
    /// Converts, rendering any error with `Display`.
    fn into_outcome(self) -> Outcome<T>;

    /// Converts, reporting `message` instead of the original error.
    fn into_outcome_or<S: Into<String>>(self, message: S) -> Outcome<T>;
}

impl<T, E: Display> IntoOutcome<T> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_result(self)
    }

    #[inline]
    fn into_outcome_or<S: Into<String>>(self, message: S) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(_) => Outcome::failure(message),
        }
    }
}

impl<T> IntoOutcome<T> for Option<T> {
    /// `None` becomes a failure carrying [`NOT_INITIALIZED`](crate::NOT_INITIALIZED).
    #[inline]
    fn into_outcome(self) -> Outcome<T> {
        Outcome::from_option(self, crate::NOT_INITIALIZED)
    }

    #[inline]
    fn into_outcome_or<S: Into<String>>(self, message: S) -> Outcome<T> {
        Outcome::from_option(self, message)
    }
}
