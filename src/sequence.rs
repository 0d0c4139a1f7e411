//! Applicative aggregation over lists of outcomes.
//!
//! Sequencing turns many independent outcomes into one. Unlike
//! [`Outcome::bind`], which stops at the first failure, sequencing inspects
//! every element and reports the errors of all failing elements, concatenated
//! in input order.
//!
//! # Examples
//!
//! ```
//! use railway::{sequence, Outcome};
//!
//! let all = sequence([Outcome::success(1), Outcome::success(2)]);
//! assert_eq!(all.into_value(), Some(vec![1, 2]));
//!
//! let some = sequence([
//!     Outcome::<i32>::failure("one"),
//!     Outcome::success(2),
//!     Outcome::failure("two"),
//! ]);
//! assert_eq!(some.errors(), ["one", "two"]);
//! ```

use crate::types::alloc_type::Vec;
use crate::types::Errors;
use crate::Outcome;

/// Collecting outcomes accumulates the errors of every failing element.
///
/// ```
/// use railway::Outcome;
///
/// let collected: Outcome<Vec<i32>> = vec![
///     Outcome::success(10),
///     Outcome::failure("bad"),
///     Outcome::failure("worse"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(collected.errors(), ["bad", "worse"]);
/// ```
impl<T, C> FromIterator<Outcome<T>> for Outcome<C>
where
    C: FromIterator<T>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<T>>>(iter: I) -> Self {
        let mut errors = Errors::new();
        let mut failed = false;

        let values: C = iter
            .into_iter()
            .filter_map(|outcome| match outcome {
                Outcome::Success(value) => Some(value),
                Outcome::Failure(errs) => {
                    failed = true;
                    errors.append(errs);
                    None
                }
            })
            .collect();

        if failed {
            Outcome::Failure(errors)
        } else {
            Outcome::Success(values)
        }
    }
}

/// Aggregates outcomes into an outcome of all their values, in order.
///
/// Succeeds iff every element succeeds. On failure the errors are the
/// concatenation of every failing element's errors, in input order.
#[inline]
pub fn sequence<T, I>(outcomes: I) -> Outcome<Vec<T>>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes.into_iter().collect()
}

/// Aggregates outcomes into a unit outcome, discarding the values.
///
/// ```
/// use railway::{sequence_unit, Outcome};
///
/// let checks = [Outcome::unit(), Outcome::failure("disk full")];
/// assert_eq!(sequence_unit(checks).errors(), ["disk full"]);
/// ```
#[inline]
pub fn sequence_unit<T, I>(outcomes: I) -> Outcome<()>
where
    I: IntoIterator<Item = Outcome<T>>,
{
    outcomes.into_iter().map(Outcome::ignore).collect()
}
