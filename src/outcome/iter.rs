use core::iter::FusedIterator;

use crate::combinators;
use crate::outcome::core::Outcome;

/// Borrowing iterator over the success value of an [`Outcome`].
///
/// Yields at most one item.
pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
impl<V> FusedIterator for Iter<'_, V> {}

/// Mutably borrowing iterator over the success value of an [`Outcome`].
pub struct IterMut<'a, V> {
    inner: Option<&'a mut V>,
}

impl<'a, V> Iterator for IterMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IterMut<'_, V> {}
impl<V> FusedIterator for IterMut<'_, V> {}

/// Borrowing iterator over the error of an [`Outcome`].
pub struct FailureIter<'a, E> {
    inner: Option<&'a E>,
}

impl<'a, E> Iterator for FailureIter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<E> ExactSizeIterator for FailureIter<'_, E> {}
impl<E> FusedIterator for FailureIter<'_, E> {}

/// Owning iterator over the success value of an [`Outcome`].
pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::from(self.inner.is_some());
        (len, Some(len))
    }
}

impl<V> ExactSizeIterator for IntoIter<V> {}
impl<V> FusedIterator for IntoIter<V> {}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.into_success(),
        }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, V, E> IntoIterator for &'a mut Outcome<V, E> {
    type Item = &'a mut V;
    type IntoIter = IterMut<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the success value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, &str>::success(3);
    /// assert_eq!(o.iter().copied().sum::<i32>(), 3);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.as_ref().into_success(),
        }
    }

    /// Iterates mutably over the success value, if any.
    pub fn iter_mut(&mut self) -> IterMut<'_, V> {
        IterMut {
            inner: self.as_mut().into_success(),
        }
    }

    /// Iterates over the error, if any.
    pub fn iter_failure(&self) -> FailureIter<'_, E> {
        FailureIter {
            inner: self.as_ref().into_failure(),
        }
    }
}

/// Collects a sequence of outcomes, stopping at the first failure.
///
/// The values of an all-success sequence are gathered into `C` in order.
/// Otherwise the first failure, scanning left to right, is returned and the
/// rest of the input is left unread. This is the same policy as
/// [`combine`](crate::combinators::combine).
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::success(2)].into_iter().collect();
/// assert_eq!(all, Outcome::Success(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::success(1), Outcome::failure("a"), Outcome::failure("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure, Outcome::Failure("a"));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        combinators::combine_into(iter)
    }
}
