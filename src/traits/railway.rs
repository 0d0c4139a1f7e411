use crate::types::alloc_type::String;
use crate::types::Errors;
use crate::Outcome;

/// Two-state capability shared by every outcome shape.
///
/// Both the unit outcome `Outcome<()>` and valued outcomes `Outcome<T>`
/// answer the same questions: which track are we on, and which messages were
/// reported. Code that only needs those answers can stay generic over the
/// value type, or accept a plain `Result<T, Errors>`.
///
/// # Examples
///
/// ```
/// use railway::traits::Railway;
/// use railway::Outcome;
///
/// fn summary<R: Railway>(rail: &R) -> String {
///     if rail.is_success() {
///         "ok".to_string()
///     } else {
///         rail.errors().join(", ")
///     }
/// }
///
/// assert_eq!(summary(&Outcome::unit()), "ok");
/// assert_eq!(summary(&Outcome::<u8>::failure_many(["a", "b"])), "a, b");
/// ```
pub trait Railway {
    /// Returns `true` on the success track.
    fn is_success(&self) -> bool;

    /// Returns `true` on the failure track.
    fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Failure messages in order; empty on success.
    fn errors(&self) -> &[String];
}

impl<T> Railway for Outcome<T> {
    #[inline]
    fn is_success(&self) -> bool {
        Outcome::is_success(self)
    }

    #[inline]
    fn errors(&self) -> &[String] {
        Outcome::errors(self)
    }
}

impl<T> Railway for Result<T, Errors> {
    #[inline]
    fn is_success(&self) -> bool {
        self.is_ok()
    }

    #[inline]
    fn errors(&self) -> &[String] {
        match self {
            Ok(_) => &[],
            Err(errors) => errors.as_slice(),
        }
    }
}
