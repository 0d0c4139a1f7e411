use crate::outcome::core::Outcome;

/// Iterator over a reference to the success value, yielding at most one item.
pub struct Iter<'a, T> {
    inner: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

/// Owning iterator over the success value, yielding at most one item.
pub struct IntoIter<T> {
    inner: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<T> IntoIterator for Outcome<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_value(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Outcome<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Outcome<T> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use railway::Outcome;
    ///
    /// assert_eq!(Outcome::success(3).iter().count(), 1);
    /// assert_eq!(Outcome::<i32>::failure("e").iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.value(),
        }
    }

    /// Iterates over the failure messages in order.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, crate::types::alloc_type::String> {
        self.errors().iter()
    }
}
