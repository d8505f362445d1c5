use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::ops::{Deref, DerefMut};

use simplevec_common::{Error, Result};

/// Exclusive owner of a single fixed-length heap block of `T`.
///
/// The block is either absent (the null state, which holds no allocation) or
/// holds `len()` initialized slots. Ownership moves with the value and is never
/// duplicated: `ArrayPtr` deliberately does not implement `Clone`.
///
/// ```compile_fail
/// use simplevec_array_ptr::ArrayPtr;
///
/// let a = ArrayPtr::<u32>::new(4);
/// let b = a.clone();
/// ```
///
/// Indexing goes through the slice view, so an index past `len()` panics rather
/// than touching memory outside the block.
pub struct ArrayPtr<T> {
    block: Box<[T]>,
}

impl<T> ArrayPtr<T> {
    /// Creates an `ArrayPtr` in the null state. Does not allocate.
    #[inline]
    pub fn null() -> ArrayPtr<T> {
        ArrayPtr {
            block: Box::default(),
        }
    }

    /// Takes ownership of an existing block.
    #[inline]
    pub fn from_boxed_slice(block: Box<[T]>) -> ArrayPtr<T> {
        ArrayPtr { block }
    }

    /// Returns the number of slots in the owned block.
    #[inline]
    pub fn len(&self) -> usize {
        self.block.len()
    }

    /// Returns `true` if the block has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.block.is_empty()
    }

    /// Returns `true` if no block is owned.
    ///
    /// Zero-length blocks are never allocated, so this is equivalent to
    /// [`is_empty`](Self::is_empty).
    #[inline]
    pub fn is_null(&self) -> bool {
        self.block.is_empty()
    }

    /// Returns a raw pointer to the start of the block, or a null pointer
    /// in the null state.
    ///
    /// The pointer is valid only while this `ArrayPtr` is alive and owns the
    /// same block.
    #[inline]
    pub fn get(&self) -> *const T {
        if self.is_null() {
            std::ptr::null()
        } else {
            self.block.as_ptr()
        }
    }

    /// Mutable counterpart of [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self) -> *mut T {
        if self.is_null() {
            std::ptr::null_mut()
        } else {
            self.block.as_mut_ptr()
        }
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.block
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.block
    }

    /// Relinquishes ownership of the block and leaves `self` null.
    ///
    /// The caller becomes responsible for the returned block.
    #[must_use]
    pub fn release(&mut self) -> Box<[T]> {
        std::mem::take(&mut self.block)
    }

    /// Moves the block out into a new `ArrayPtr`, leaving `self` null.
    #[must_use]
    pub fn take(&mut self) -> ArrayPtr<T> {
        ArrayPtr::from_boxed_slice(self.release())
    }

    /// Exchanges the owned blocks of `self` and `other` without touching
    /// any element.
    #[inline]
    pub fn swap(&mut self, other: &mut ArrayPtr<T>) {
        std::mem::swap(&mut self.block, &mut other.block);
    }

    /// Consumes the `ArrayPtr`, returning the owned block.
    pub fn into_boxed_slice(self) -> Box<[T]> {
        self.block
    }
}

impl<T: Default> ArrayPtr<T> {
    /// Allocates a block of `len` default-valued slots.
    ///
    /// A `len` of zero yields the null state without allocating.
    ///
    /// # Panics
    ///
    /// Aborts on allocation failure, like `Vec`. Use [`try_new`](Self::try_new)
    /// to observe the failure instead.
    pub fn new(len: usize) -> ArrayPtr<T> {
        if len == 0 {
            return ArrayPtr::null();
        }
        let mut slots = Vec::with_capacity(len);
        slots.resize_with(len, T::default);
        ArrayPtr::from_boxed_slice(slots.into_boxed_slice())
    }

    /// Allocates a block of `len` default-valued slots, reporting
    /// `OutOfMemory` if the allocator refuses.
    pub fn try_new(len: usize) -> Result<ArrayPtr<T>> {
        if len == 0 {
            return Ok(ArrayPtr::null());
        }
        let mut slots = Vec::new();
        slots.try_reserve_exact(len).map_err(|e| {
            log::debug!(
                "allocation of {len} slots of {} bytes failed: {e}",
                std::mem::size_of::<T>()
            );
            Error::out_of_memory(len, e)
        })?;
        slots.resize_with(len, T::default);
        Ok(ArrayPtr::from_boxed_slice(slots.into_boxed_slice()))
    }
}

impl<T> Default for ArrayPtr<T> {
    fn default() -> Self {
        ArrayPtr::null()
    }
}

impl<T> Deref for ArrayPtr<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.block
    }
}

impl<T> DerefMut for ArrayPtr<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.block
    }
}

impl<T> AsRef<[T]> for ArrayPtr<T> {
    fn as_ref(&self) -> &[T] {
        &self.block
    }
}

impl<T> AsMut<[T]> for ArrayPtr<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.block
    }
}

impl<T> Borrow<[T]> for ArrayPtr<T> {
    fn borrow(&self) -> &[T] {
        &self.block
    }
}

impl<T> BorrowMut<[T]> for ArrayPtr<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.block
    }
}

impl<T> From<Box<[T]>> for ArrayPtr<T> {
    fn from(block: Box<[T]>) -> Self {
        ArrayPtr::from_boxed_slice(block)
    }
}

impl<T> From<Vec<T>> for ArrayPtr<T> {
    fn from(vec: Vec<T>) -> Self {
        ArrayPtr::from_boxed_slice(vec.into_boxed_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayPtr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ArrayPtr").field(&self.as_slice()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_new_default_fills() {
        let p = ArrayPtr::<u32>::new(5);
        assert_eq!(p.len(), 5);
        assert!(!p.is_null());
        assert!(!p.get().is_null());
        assert!(p.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_zero_len_is_null() {
        let mut p = ArrayPtr::<String>::new(0);
        assert!(p.is_null());
        assert!(p.is_empty());
        assert!(p.get().is_null());
        assert!(p.get_mut().is_null());

        let p = ArrayPtr::<String>::default();
        assert!(p.is_null());
    }

    #[test]
    fn test_index_read_write() {
        let mut p = ArrayPtr::<i64>::new(3);
        p[0] = 10;
        p[2] = -4;
        assert_eq!(p.as_slice(), &[10, 0, -4]);
        assert_eq!(p[2], -4);
    }

    #[test]
    #[should_panic]
    fn test_index_past_block_panics() {
        let p = ArrayPtr::<u8>::new(2);
        let _ = p[2];
    }

    #[test]
    fn test_raw_pointer_tracks_block() {
        let mut p = ArrayPtr::<u16>::new(4);
        let before = p.get();
        p[1] = 7;
        assert_eq!(p.get(), before);
        assert_eq!(p.get_mut() as *const u16, before);
    }

    #[test]
    fn test_release_leaves_null() {
        let mut p = ArrayPtr::from(vec![1, 2, 3]);
        let ptr = p.get();
        let block = p.release();
        assert!(p.is_null());
        assert_eq!(&*block, &[1, 2, 3]);
        assert_eq!(block.as_ptr(), ptr);
    }

    #[test]
    fn test_take_transfers_ownership() {
        let mut src = ArrayPtr::from(vec!["a".to_string(), "b".to_string()]);
        let ptr = src.get();
        let dst = src.take();
        assert!(src.is_null());
        assert_eq!(dst.get(), ptr);
        assert_eq!(dst.as_slice(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_swap_exchanges_blocks() {
        let mut a = ArrayPtr::from(vec![1u8, 2]);
        let mut b = ArrayPtr::<u8>::null();
        let a_ptr = a.get();
        a.swap(&mut b);
        assert!(a.is_null());
        assert_eq!(b.get(), a_ptr);
        assert_eq!(b.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_try_new() {
        let p = ArrayPtr::<u64>::try_new(16).unwrap();
        assert_eq!(p.len(), 16);
        assert!(ArrayPtr::<u64>::try_new(0).unwrap().is_null());

        let err = ArrayPtr::<u64>::try_new(usize::MAX).unwrap_err();
        assert!(err.is_out_of_memory());
    }

    #[test]
    fn test_drop_releases_elements() {
        let token = Rc::new(());
        {
            let mut p = ArrayPtr::<Option<Rc<()>>>::new(3);
            p[0] = Some(token.clone());
            p[2] = Some(token.clone());
            assert_eq!(Rc::strong_count(&token), 3);
        }
        assert_eq!(Rc::strong_count(&token), 1);
    }

    #[test]
    fn test_debug() {
        let p = ArrayPtr::from(vec![1, 2]);
        assert_eq!(format!("{p:?}"), "ArrayPtr([1, 2])");
    }
}
