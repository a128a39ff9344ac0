//! Fallible scratch allocation.
//!
//! Every auxiliary buffer in the crate goes through here, so an allocation failure
//! surfaces as [`SortError::AllocationFailure`] instead of an abort. Buffers are plain
//! `Vec`s owned by the calling frame and freed on every exit path.

use crate::error::SortError;

/// Returns a zeroed counter array of `len` slots.
pub(crate) fn counts(len: usize) -> Result<Vec<usize>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SortError::AllocationFailure { requested: len })?;
    buf.resize(len, 0);
    Ok(buf)
}

/// Returns an owned copy of `src`.
pub(crate) fn copy_of<T: Clone>(src: &[T]) -> Result<Vec<T>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(src.len())
        .map_err(|_| SortError::AllocationFailure {
            requested: src.len(),
        })?;
    buf.extend_from_slice(src);
    Ok(buf)
}
