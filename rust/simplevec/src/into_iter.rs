//! By-value iteration over the live elements of a [`SimpleVec`].

use std::iter::FusedIterator;

use crate::SimpleVec;

/// An owning iterator over the live elements of a [`SimpleVec`].
///
/// Spare slots past the array's length are dropped when the iterator is
/// created and never yielded.
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    /// Returns the remaining elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for SimpleVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (block, size) = self.into_parts();
        let mut elements = block.into_vec();
        elements.truncate(size);
        IntoIter {
            inner: elements.into_iter(),
        }
    }
}
