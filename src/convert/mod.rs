//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to adopt the outcome rail at the
//! edges of an existing codebase: wrap incoming `Result`s, and hand plain
//! `Result`s back to APIs that expect them.
//!
//! # Examples
//!
//! ```
//! use railway::convert::*;
//! use railway::Outcome;
//!
//! let outcome = result_to_outcome("42".parse::<i32>());
//! assert_eq!(outcome, Outcome::success(42));
//!
//! let result = outcome_to_first_error(Outcome::<i32>::failure_many(["a", "b"]));
//! assert_eq!(result, Err("a".to_string()));
//! ```

use core::fmt::Display;

use crate::types::alloc_type::String;
use crate::types::Errors;
use crate::Outcome;

/// Converts a `Result` to an [`Outcome`], rendering the error with `Display`.
///
/// # Examples
///
/// ```
/// use railway::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, _>("boom"));
/// assert_eq!(outcome.errors(), ["boom"]);
/// ```
#[inline]
pub fn result_to_outcome<T, E: Display>(result: Result<T, E>) -> Outcome<T> {
    Outcome::from_result(result)
}

/// Converts an [`Outcome`] to a `Result` carrying every failure message.
#[inline]
pub fn outcome_to_result<T>(outcome: Outcome<T>) -> Result<T, Errors> {
    outcome.into_result()
}

/// Converts an [`Outcome`] to a `Result`, keeping only the first failure message.
///
/// A failure without messages maps to an empty string.
#[inline]
pub fn outcome_to_first_error<T>(outcome: Outcome<T>) -> Result<T, String> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::Failure(errors) => Err(errors.into_iter().next().unwrap_or_default()),
    }
}

/// Converts an `Option` to an [`Outcome`], failing with `message` on `None`.
#[inline]
pub fn option_to_outcome<T, S: Into<String>>(option: Option<T>, message: S) -> Outcome<T> {
    Outcome::from_option(option, message)
}

/// Collects many `Result`s into one [`Outcome`], accumulating every error.
///
/// Unlike collecting into `Result<Vec<T>, E>`, this does not stop at the first
/// `Err`.
///
/// # Examples
///
/// ```
/// use railway::convert::collect_results;
///
/// let parsed = collect_results(["1", "x", "3", "y"].iter().map(|s| s.parse::<i32>()));
/// assert_eq!(parsed.errors().len(), 2);
/// ```
pub fn collect_results<T, E, I>(results: I) -> Outcome<crate::types::alloc_type::Vec<T>>
where
    E: Display,
    I: IntoIterator<Item = Result<T, E>>,
{
    results.into_iter().map(Outcome::from_result).collect()
}
