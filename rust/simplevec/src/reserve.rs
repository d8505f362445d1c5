//! Capacity requests for constructing an empty [`SimpleVec`](crate::SimpleVec)
//! with pre-allocated slots.
//!
//! `SimpleVec::with_size(n)` holds `n` live elements while
//! `SimpleVec::from(reserve(n))` holds none; the distinct request type keeps the
//! two from being confused at the call site.

/// A request for `capacity` allocated slots and no live elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReserveRequest {
    capacity: usize,
}

impl ReserveRequest {
    #[inline]
    pub const fn new(capacity: usize) -> ReserveRequest {
        ReserveRequest { capacity }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Shorthand for [`ReserveRequest::new`].
///
/// ```
/// use simplevec::{reserve, SimpleVec};
///
/// let v: SimpleVec<String> = reserve(8).into();
/// assert!(v.is_empty());
/// assert_eq!(v.capacity(), 8);
/// ```
#[inline]
pub const fn reserve(capacity: usize) -> ReserveRequest {
    ReserveRequest::new(capacity)
}
