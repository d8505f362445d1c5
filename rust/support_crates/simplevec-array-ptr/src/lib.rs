//! Single-owner heap blocks backing the simplevec containers.
//!
//! An [`ArrayPtr`] owns exactly one fixed-length block of elements. It never
//! resizes; growing containers allocate a fresh block and move their contents
//! across.

#![forbid(unsafe_code)]

pub mod array_ptr;

pub use array_ptr::ArrayPtr;
