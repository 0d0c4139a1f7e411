use crate::types::alloc_type::String;
use crate::types::ErrorVec;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered collection of failure messages carried by [`Outcome::Failure`](crate::Outcome::Failure).
///
/// Messages keep their insertion order and duplicates are allowed, so two
/// `Errors` are equal only when they hold the same messages in the same order.
/// Storage is an [`ErrorVec`], which keeps a single message inline.
///
/// # Examples
///
/// ```
/// use railway::Errors;
///
/// let mut errors = Errors::from("first");
/// errors.push("second");
/// errors.push("first");
///
/// assert_eq!(errors.len(), 3);
/// assert_eq!(errors.as_slice(), ["first", "second", "first"]);
/// assert_eq!(errors.to_string(), "first; second; first");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Errors {
    items: ErrorVec<String>,
}

impl Errors {
    /// Creates an empty collection.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: ErrorVec::new(),
        }
    }

    /// Appends a single message.
    #[inline]
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(message.into());
    }

    /// Appends every message from `other`, keeping their order.
    #[inline]
    pub fn append(&mut self, other: Errors) {
        self.items.extend(other.items);
    }

    /// Extends the collection with messages from an iterator.
    #[inline]
    pub fn extend<I, S>(&mut self, iter: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(iter.into_iter().map(Into::into));
    }

    /// Returns true if no message was recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the first message, if any.
    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    /// Returns an iterator over the messages.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, String> {
        self.items.iter()
    }

    /// Views the messages as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Rewrites every message with `f`, preserving order and count.
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        Self {
            items: self.items.into_iter().map(f).collect(),
        }
    }

    /// Consumes the collection and returns the underlying `ErrorVec`.
    #[inline]
    pub fn into_inner(self) -> ErrorVec<String> {
        self.items
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, message) in self.items.iter().enumerate() {
            if index > 0 {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
        }
        Ok(())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Errors {}

impl From<ErrorVec<String>> for Errors {
    fn from(items: ErrorVec<String>) -> Self {
        Self { items }
    }
}

impl From<String> for Errors {
    fn from(message: String) -> Self {
        let mut errors = Self::new();
        errors.push(message);
        errors
    }
}

impl From<&str> for Errors {
    fn from(message: &str) -> Self {
        Self::from(String::from(message))
    }
}

impl<S: Into<String>> FromIterator<S> for Errors {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Errors {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 1]>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a String;
    type IntoIter = core::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
