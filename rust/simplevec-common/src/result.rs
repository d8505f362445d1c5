pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// Fails the enclosing function with `OutOfRange` unless `index < len`.
#[macro_export]
macro_rules! verify_index {
    ($operation:expr, $index:expr, $len:expr) => {{
        $crate::result::verify_index($operation, $index, $len)?;
    }};
}

/// Fails the enclosing function with `OutOfRange` unless `position <= len`.
///
/// Used where one-past-the-end is a valid position (insertion).
#[macro_export]
macro_rules! verify_position {
    ($operation:expr, $position:expr, $len:expr) => {{
        $crate::result::verify_position($operation, $position, $len)?;
    }};
}

#[inline]
pub fn verify_index(operation: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        out_of_range(operation, index, len)
    }
}

#[inline]
pub fn verify_position(operation: &'static str, position: usize, len: usize) -> Result<()> {
    if position <= len {
        Ok(())
    } else {
        out_of_range(operation, position, len)
    }
}

#[cold]
pub fn out_of_range<T>(operation: &'static str, index: usize, len: usize) -> Result<T> {
    Err(crate::error::Error::out_of_range(operation, index, len))
}
