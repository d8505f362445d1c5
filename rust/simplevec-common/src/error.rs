use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    /// `index` fell outside the valid range of a container holding `len` elements.
    pub fn out_of_range(operation: &'static str, index: usize, len: usize) -> Error {
        Error(
            ErrorKind::OutOfRange {
                operation,
                index,
                len,
            }
            .into(),
        )
    }

    /// The allocator refused a block of `requested` elements.
    pub fn out_of_memory(requested: usize, source: TryReserveError) -> Error {
        Error(ErrorKind::OutOfMemory { requested, source }.into())
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_out_of_memory(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfMemory { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[error("{operation}: index {index} is out of range for length {len}")]
    OutOfRange {
        operation: &'static str,
        index: usize,
        len: usize,
    },

    #[error("failed to allocate a block of {requested} elements")]
    OutOfMemory {
        requested: usize,
        source: TryReserveError,
    },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
