//! Core traits and types for the generic sort.
//!
//! This module defines:
//! - [`RecordAccess`]: index-based access to a sequence of records, which is what
//!   [`quick_sort_by`](crate::algo::quick_sort_by) works on.
//! - [`ByteRecords`]: a byte buffer viewed as fixed-width opaque records.

use std::collections::VecDeque;

use crate::error::SortError;

/// A trait for reading and swapping records of a sequence by index.
///
/// This lets the generic quicksort work on typed collections and on raw byte
/// buffers alike, without pointer arithmetic. Records are never moved except
/// through [`swap_records`](RecordAccess::swap_records).
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use classort::core::RecordAccess;
///
/// struct Scores {
///     points: Vec<u32>,
/// }
///
/// impl RecordAccess for Scores {
///     type Record = u32;
///
///     fn record(&self, index: usize) -> &u32 {
///         &self.points[index]
///     }
///
///     fn swap_records(&mut self, a: usize, b: usize) {
///         self.points.swap(a, b);
///     }
///
///     fn len(&self) -> usize {
///         self.points.len()
///     }
/// }
/// ```
pub trait RecordAccess {
    /// The record type handed to the comparator.
    type Record: ?Sized;

    /// Returns the record at the given index.
    fn record(&self, index: usize) -> &Self::Record;

    /// Exchanges the records at `a` and `b`.
    fn swap_records(&mut self, a: usize, b: usize);

    /// Returns the number of records in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RecordAccess for [T] {
    type Record = T;

    fn record(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_records(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl so callers don't need `.as_mut_slice()`.
impl<T> RecordAccess for Vec<T> {
    type Record = T;

    fn record(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_records(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// O(1) indexing, so quicksort works on the ring buffer directly.
impl<T> RecordAccess for VecDeque<T> {
    type Record = T;

    fn record(&self, index: usize) -> &T {
        &self[index]
    }

    fn swap_records(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }

    fn len(&self) -> usize {
        self.len()
    }
}

/// A mutable byte buffer viewed as `len / width` records of `width` bytes each.
///
/// Records are compared as `&[u8]` and swapped byte-for-byte, so any fixed-size
/// layout can be sorted as long as the comparator knows how to read it.
///
/// ```
/// use classort::core::ByteRecords;
/// use classort::quick_sort_by;
///
/// // Three little-endian u16 records.
/// let mut raw = [3u8, 0, 1, 0, 2, 0];
/// let mut records = ByteRecords::new(&mut raw, 2).unwrap();
/// quick_sort_by(&mut records, |a: &[u8], b: &[u8]| {
///     u16::from_le_bytes([a[0], a[1]]).cmp(&u16::from_le_bytes([b[0], b[1]]))
/// });
/// assert_eq!(raw, [1, 0, 2, 0, 3, 0]);
/// ```
#[derive(Debug)]
pub struct ByteRecords<'a> {
    bytes: &'a mut [u8],
    width: usize,
}

impl<'a> ByteRecords<'a> {
    /// Wraps `bytes` as records of `width` bytes.
    ///
    /// Fails if `width` is zero or does not evenly divide the buffer length.
    pub fn new(bytes: &'a mut [u8], width: usize) -> Result<Self, SortError> {
        if width == 0 || bytes.len() % width != 0 {
            return Err(SortError::InvalidRecordWidth {
                width,
                len: bytes.len(),
            });
        }
        Ok(Self { bytes, width })
    }

    /// Width of a single record in bytes.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Releases the underlying buffer.
    pub fn into_inner(self) -> &'a mut [u8] {
        self.bytes
    }
}

impl RecordAccess for ByteRecords<'_> {
    type Record = [u8];

    fn record(&self, index: usize) -> &[u8] {
        let start = index * self.width;
        &self.bytes[start..start + self.width]
    }

    fn swap_records(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let width = self.width;
        // Split at the higher record so both can be borrowed mutably.
        let (head, tail) = self.bytes.split_at_mut(hi * width);
        head[lo * width..(lo + 1) * width].swap_with_slice(&mut tail[..width]);
    }

    fn len(&self) -> usize {
        self.bytes.len() / self.width
    }
}
