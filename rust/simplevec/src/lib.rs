//! A contiguous, growable array with explicit capacity management.
//!
//! [`SimpleVec`] keeps a logical length separate from the number of allocated
//! slots. The slots live in a single [`ArrayPtr`] block; when the block is full
//! the next append allocates a block twice as large (or one slot, starting from
//! empty) and moves the live elements across, which keeps appends amortized O(1).
//!
//! Slots past the logical length always hold `T::default()`. Removing an element
//! (`pop_back`, `erase`, shrinking `resize`, `clear`) resets the vacated slot, so
//! any resource the element owned is released immediately rather than when the
//! block is dropped.
//!
//! # Checked and unchecked access
//!
//! Indexing with `[]` asserts `index < len()` in debug builds only. Release builds
//! still cannot read outside the allocated block, but an index between `len()` and
//! `capacity()` yields a default-valued slot instead of failing. [`SimpleVec::at`],
//! [`SimpleVec::insert`] and [`SimpleVec::erase`] always validate their position and
//! report [`ErrorKind::OutOfRange`] without modifying the container.
//!
//! ```
//! use simplevec::{simple_vec, SimpleVec};
//!
//! let mut v: SimpleVec<i32> = SimpleVec::new();
//! v.push_back(10);
//! v.push_back(20);
//! v.insert(1, 15).unwrap();
//! assert_eq!(v, simple_vec![10, 15, 20]);
//!
//! v.erase(0).unwrap();
//! assert_eq!(v.as_slice(), &[15, 20]);
//! assert!(v.at(5).is_err());
//! ```

#![forbid(unsafe_code)]

pub mod into_iter;
pub mod reserve;
pub mod simple_vec;


pub use into_iter::IntoIter;
pub use reserve::{ReserveRequest, reserve};
pub use simple_vec::SimpleVec;
pub use simplevec_array_ptr::ArrayPtr;
pub use simplevec_common::{Error, ErrorKind, Result};

/// Creates a [`SimpleVec`] from a list of elements, or from an element and a count.
///
/// ```
/// use simplevec::simple_vec;
///
/// let v = simple_vec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let w = simple_vec!["x"; 2];
/// assert_eq!(w.as_slice(), &["x", "x"]);
/// ```
#[macro_export]
macro_rules! simple_vec {
    () => {
        $crate::SimpleVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::SimpleVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::SimpleVec::from([$($x),+])
    };
}
