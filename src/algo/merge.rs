//! Top-down merge sort.

use std::cmp::Ordering;

use crate::error::SortError;
use crate::scratch;

/// Sorts the slice in ascending order with merge sort.
///
/// Stable, O(n log n). Each merge copies its two runs into scratch buffers which are
/// released as soon as the merge finishes.
///
/// # Errors
///
/// Returns [`SortError::AllocationFailure`] if a merge cannot reserve its buffers. The
/// recursion stops at the first failure; the slice is left a permutation of the input
/// in an unspecified order.
///
/// ```
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// classort::merge_sort(&mut data).unwrap();
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn merge_sort<T: Ord + Clone>(seq: &mut [T]) -> Result<(), SortError> {
    merge_sort_by(seq, T::cmp)
}

/// Merge sort with a custom comparator.
pub fn merge_sort_by<T, F>(seq: &mut [T], mut cmp: F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_run(seq, &mut cmp)
}

fn sort_run<T, F>(seq: &mut [T], cmp: &mut F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if seq.len() <= 1 {
        return Ok(());
    }

    // Closed range [0, len - 1] split at its midpoint; the left run keeps `mid`.
    let split = (seq.len() - 1) / 2 + 1;
    {
        let (left, right) = seq.split_at_mut(split);
        sort_run(left, cmp)?;
        sort_run(right, cmp)?;
    }
    merge(seq, split, cmp)
}

/// Merges the sorted runs `seq[..split]` and `seq[split..]`.
fn merge<T, F>(seq: &mut [T], split: usize, cmp: &mut F) -> Result<(), SortError>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = scratch::copy_of(&seq[..split])?;
    let right = scratch::copy_of(&seq[split..])?;

    let (mut l, mut r, mut out) = (0, 0, 0);
    while l < left.len() && r < right.len() {
        // Ties go left.
        if cmp(&right[r], &left[l]) == Ordering::Less {
            seq[out] = right[r].clone();
            r += 1;
        } else {
            seq[out] = left[l].clone();
            l += 1;
        }
        out += 1;
    }

    for item in left[l..].iter().chain(&right[r..]) {
        seq[out] = item.clone();
        out += 1;
    }

    Ok(())
}
