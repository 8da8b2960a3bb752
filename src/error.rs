//! Crate errors.

use thiserror::Error;

/// Crate result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors from constructing, indexing and combining containers.
///
/// ```
/// use dynla::{Error, Vector, MAX_VECTOR_SIZE};
///
/// let err = Vector::<i32>::new(0).unwrap_err();
/// assert_eq!(err, Error::InvalidSize { requested: 0, max: MAX_VECTOR_SIZE });
///
/// let v = Vector::<i32>::new(3).unwrap();
/// assert_eq!(v.at(3).unwrap_err(), Error::IndexOutOfRange { index: 3, len: 3 });
/// ```
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested length or dimension is zero or above the ceiling.
    #[error("invalid size {requested}, expected a value in 1..={max}")]
    InvalidSize {
        /// The rejected length or dimension.
        requested: usize,
        /// The ceiling that applied.
        max: usize,
    },

    /// Checked access outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the indexed axis.
        len: usize,
    },

    /// Binary operation between containers of incompatible size.
    #[error("size mismatch: expected {expected}, found {found}")]
    SizeMismatch {
        /// Size required by the left-hand operand.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },
}

/// Errors from filling a container from text.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The input ended before every element was read.
    #[error("input ended after {found} of {expected} elements")]
    UnexpectedEnd {
        /// Elements the container needed.
        expected: usize,
        /// Elements actually available.
        found: usize,
    },

    /// A token could not be parsed as the element type.
    #[error("element {index} could not be parsed")]
    Parse {
        /// Position of the bad token, row-major.
        index: usize,
    },

    /// Reader error.
    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
