use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use simplevec_array_ptr::ArrayPtr;
use simplevec_common::{Result, verify_index, verify_position};

use crate::reserve::ReserveRequest;

/// A contiguous growable array.
///
/// `len()` elements are live; the remaining `capacity() - len()` slots of the
/// backing block hold `T::default()`. The backing block is unallocated exactly
/// when `capacity() == 0`.
///
/// Cloning copies only the live elements: the clone's capacity equals its length.
pub struct SimpleVec<T> {
    buffer: ArrayPtr<T>,
    size: usize,
}

impl<T> SimpleVec<T> {
    /// Creates an empty `SimpleVec`. Does not allocate.
    #[inline]
    pub fn new() -> SimpleVec<T> {
        SimpleVec {
            buffer: ArrayPtr::null(),
            size: 0,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..self.size]
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer[..self.size]
    }

    /// Returns a reference to the element at `index`, or `OutOfRange` if
    /// `index >= len()`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        verify_index!("at", index, self.size);
        Ok(&self.buffer[index])
    }

    /// Mutable counterpart of [`at`](Self::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        verify_index!("at_mut", index, self.size);
        Ok(&mut self.buffer[index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Exchanges the contents, length and capacity of two arrays. No element is
    /// moved or copied.
    #[inline]
    pub fn swap(&mut self, other: &mut SimpleVec<T>) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.size, &mut other.size);
    }

    /// Moves the contents out into a new `SimpleVec`, leaving `self` empty with
    /// no allocation.
    #[must_use]
    pub fn take(&mut self) -> SimpleVec<T> {
        std::mem::take(self)
    }

    pub(crate) fn into_parts(self) -> (Box<[T]>, usize) {
        (self.buffer.into_boxed_slice(), self.size)
    }
}

impl<T: Default> SimpleVec<T> {
    /// Creates an array of `size` default-valued elements; capacity equals `size`.
    pub fn with_size(size: usize) -> SimpleVec<T> {
        SimpleVec {
            buffer: ArrayPtr::new(size),
            size,
        }
    }

    /// Creates an empty array with exactly `capacity` allocated slots.
    pub fn with_capacity(capacity: usize) -> SimpleVec<T> {
        SimpleVec {
            buffer: ArrayPtr::new(capacity),
            size: 0,
        }
    }

    /// Ensures the capacity is at least `new_capacity`.
    ///
    /// Allocates a block of exactly `new_capacity` slots when growing and moves
    /// the live elements into it. Never shrinks and never changes the length.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Fallible counterpart of [`reserve`](Self::reserve).
    ///
    /// On `OutOfMemory` the array is left unchanged.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<()> {
        if new_capacity > self.capacity() {
            let buffer = ArrayPtr::try_new(new_capacity)?;
            self.adopt(buffer);
        }
        Ok(())
    }

    /// Changes the length to `new_size`.
    ///
    /// Growing past the capacity reallocates to exactly `new_size` slots. New
    /// elements are default-valued. Shrinking resets the dropped slots to their
    /// default value and keeps the capacity.
    pub fn resize(&mut self, new_size: usize) {
        match new_size.cmp(&self.size) {
            Ordering::Equal => return,
            Ordering::Greater if new_size > self.capacity() => {
                self.reallocate(new_size);
            }
            Ordering::Greater => {
                self.buffer[self.size..new_size].fill_with(T::default);
            }
            Ordering::Less => {
                self.buffer[new_size..self.size].fill_with(T::default);
            }
        }
        self.size = new_size;
    }

    /// Shortens the array to `len` elements. Has no effect if `len >= len()`.
    pub fn truncate(&mut self, len: usize) {
        if len < self.size {
            self.resize(len);
        }
    }

    /// Appends `value`, doubling the capacity first if the array is full.
    pub fn push_back(&mut self, value: T) {
        if self.size == self.capacity() {
            self.reallocate(self.grown_capacity());
        }
        self.buffer[self.size] = value;
        self.size += 1;
    }

    /// Inserts `value` at `position`, shifting later elements one slot right.
    ///
    /// `position == len()` appends. Returns the index of the inserted element,
    /// or `OutOfRange` if `position > len()`, in which case nothing changes.
    pub fn insert(&mut self, position: usize, value: T) -> Result<usize> {
        verify_position!("insert", position, self.size);
        let size = self.size;
        if size == self.capacity() {
            let capacity = self.grown_capacity();
            log::trace!("insert at {position}: growing capacity {size} -> {capacity}");
            let mut buffer = ArrayPtr::<T>::new(capacity);
            buffer[..position].swap_with_slice(&mut self.buffer[..position]);
            buffer[position] = value;
            buffer[position + 1..=size].swap_with_slice(&mut self.buffer[position..size]);
            self.buffer = buffer;
        } else {
            self.buffer[size] = value;
            self.buffer[position..=size].rotate_right(1);
        }
        self.size += 1;
        Ok(position)
    }

    /// Removes and returns the last element.
    ///
    /// Calling this on an empty array is a caller error: debug builds panic,
    /// release builds return `None`. Never allocates.
    pub fn pop_back(&mut self) -> Option<T> {
        debug_assert!(self.size > 0, "pop_back called on an empty SimpleVec");
        if self.size == 0 {
            return None;
        }
        self.size -= 1;
        Some(std::mem::take(&mut self.buffer[self.size]))
    }

    /// Removes and returns the element at `position`, shifting later elements one
    /// slot left. Fails with `OutOfRange` if `position >= len()`.
    pub fn remove(&mut self, position: usize) -> Result<T> {
        verify_index!("remove", position, self.size);
        self.buffer[position..self.size].rotate_left(1);
        self.size -= 1;
        Ok(std::mem::take(&mut self.buffer[self.size]))
    }

    /// Removes the element at `position` and returns `position`, which now holds
    /// the element that followed the removed one (or equals `len()`).
    ///
    /// Fails with `OutOfRange` if the array is empty or `position >= len()`.
    pub fn erase(&mut self, position: usize) -> Result<usize> {
        verify_index!("erase", position, self.size);
        self.buffer[position..self.size].rotate_left(1);
        self.size -= 1;
        self.buffer[self.size] = T::default();
        Ok(position)
    }

    /// Removes all elements, keeping the allocated capacity.
    ///
    /// The vacated slots are reset to their default value.
    pub fn clear(&mut self) {
        self.buffer[..self.size].fill_with(T::default);
        self.size = 0;
    }

    fn grown_capacity(&self) -> usize {
        match self.capacity() {
            0 => 1,
            capacity => capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow()),
        }
    }

    #[cold]
    fn reallocate(&mut self, new_capacity: usize) {
        log::trace!(
            "reallocating: capacity {} -> {new_capacity}, len {}",
            self.capacity(),
            self.size
        );
        self.adopt(ArrayPtr::new(new_capacity));
    }

    /// Moves the live elements into `buffer` and makes it the backing block.
    fn adopt(&mut self, mut buffer: ArrayPtr<T>) {
        debug_assert!(buffer.len() >= self.size);
        let size = self.size;
        buffer[..size].swap_with_slice(&mut self.buffer[..size]);
        self.buffer = buffer;
    }
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("SimpleVec capacity overflow");
}

impl<T: Clone> SimpleVec<T> {
    /// Creates an array of `size` clones of `value`; capacity equals `size`.
    pub fn from_elem(size: usize, value: T) -> SimpleVec<T> {
        SimpleVec::from(vec![value; size])
    }
}

impl<T> Default for SimpleVec<T> {
    fn default() -> Self {
        SimpleVec::new()
    }
}

impl<T: Clone> Clone for SimpleVec<T> {
    fn clone(&self) -> Self {
        SimpleVec::from(self.as_slice())
    }

    /// Replaces the contents with a copy of `source`.
    ///
    /// The copy is built before `self` is touched, so a panicking element
    /// `clone` leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> Index<usize> for SimpleVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        debug_assert!(
            index < self.size,
            "index {index} out of range for length {}",
            self.size
        );
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for SimpleVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(
            index < self.size,
            "index {index} out of range for length {}",
            self.size
        );
        &mut self.buffer[index]
    }
}

impl<T> Deref for SimpleVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVec<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVec<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SimpleVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for SimpleVec<T> {}

impl<T: PartialOrd> PartialOrd for SimpleVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Ord> Ord for SimpleVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for SimpleVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> From<Vec<T>> for SimpleVec<T> {
    fn from(vec: Vec<T>) -> Self {
        let size = vec.len();
        SimpleVec {
            buffer: ArrayPtr::from(vec),
            size,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVec<T> {
    fn from(values: [T; N]) -> Self {
        SimpleVec::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for SimpleVec<T> {
    fn from(slice: &[T]) -> Self {
        SimpleVec::from(slice.to_vec())
    }
}

impl<T: Default> From<ReserveRequest> for SimpleVec<T> {
    fn from(request: ReserveRequest) -> Self {
        SimpleVec::with_capacity(request.capacity())
    }
}

impl<T> FromIterator<T> for SimpleVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SimpleVec::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Default> Extend<T> for SimpleVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SimpleVec<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVec<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let v = SimpleVec::<u32>::new();
        assert_eq!((v.len(), v.capacity()), (0, 0));

        let v = SimpleVec::<u32>::with_size(4);
        assert_eq!((v.len(), v.capacity()), (4, 4));
        assert!(v.iter().all(|&x| x == 0));

        let v = SimpleVec::from_elem(3, 42u8);
        assert_eq!(v.as_slice(), &[42, 42, 42]);
        assert_eq!(v.capacity(), 3);

        let v = SimpleVec::<String>::with_capacity(5);
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 5);

        let v = SimpleVec::from([1, 2, 3]);
        assert_eq!((v.len(), v.capacity()), (3, 3));
    }

    #[test]
    fn test_at_matches_index() {
        let mut v = SimpleVec::from([5, 6, 7]);
        for i in 0..v.len() {
            assert_eq!(*v.at(i).unwrap(), v[i]);
        }
        *v.at_mut(1).unwrap() = 60;
        assert_eq!(v[1], 60);
        assert!(v.at(3).unwrap_err().is_out_of_range());
        assert!(v.at_mut(3).is_err());
    }

    #[test]
    fn test_index_mut() {
        let mut v = SimpleVec::<i32>::with_size(2);
        v[1] = 9;
        assert_eq!(v.as_slice(), &[0, 9]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn test_index_past_len_asserts() {
        let mut v = SimpleVec::<i32>::with_capacity(4);
        v.push_back(1);
        let _ = v[2];
    }

    #[test]
    fn test_swap() {
        let mut a = SimpleVec::from([1, 2, 3]);
        let mut b = SimpleVec::<i32>::with_capacity(10);
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_debug() {
        let v = SimpleVec::from(["a", "b"]);
        assert_eq!(format!("{v:?}"), r#"["a", "b"]"#);
    }
}
