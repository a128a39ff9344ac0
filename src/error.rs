//! Error type returned by the fallible sorts.
//!
//! Only the algorithms that need scratch memory (counting, radix and merge sort)
//! or that check a precondition (radix sort keys, [`ByteRecords`] widths) can fail.
//! Everything else returns `()`.
//!
//! [`ByteRecords`]: crate::core::ByteRecords

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A scratch buffer could not be reserved.
    ///
    /// The sequence must not be assumed sorted after this error.
    AllocationFailure {
        /// Number of elements the buffer was asked to hold.
        requested: usize,
    },

    /// Radix sort only accepts non-negative keys.
    NegativeKey {
        /// Position of the first negative key.
        index: usize,
        /// The offending key.
        value: i32,
    },

    /// A byte buffer cannot be split into records of the given width.
    InvalidRecordWidth {
        /// Requested record width in bytes.
        width: usize,
        /// Length of the byte buffer.
        len: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::AllocationFailure { requested } => {
                write!(f, "Failed to allocate scratch buffer of {requested} elements")
            }
            Self::NegativeKey { index, value } => {
                write!(f, "Negative key {value} at index {index} (radix sort needs keys >= 0)")
            }
            Self::InvalidRecordWidth { width, len } => {
                write!(
                    f,
                    "Invalid record width: {width} does not evenly divide {len} bytes"
                )
            }
        }
    }
}

impl Error for SortError {}
