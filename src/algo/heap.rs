//! In-place heap sort.

use std::cmp::Ordering;

/// Sorts the slice in ascending order with heap sort.
///
/// Builds an implicit max-heap (children of `p` at `2p + 1` and `2p + 2`), then moves
/// the maximum to the end of the unsorted prefix one element at a time. O(n log n),
/// no allocation, not stable.
pub fn heap_sort<T: Ord>(seq: &mut [T]) {
    heap_sort_by(seq, T::cmp);
}

/// Heap sort with a custom comparator.
pub fn heap_sort_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();

    for parent in (0..len / 2).rev() {
        sift_down(seq, parent, len, &mut cmp);
    }

    for last in (1..len).rev() {
        seq.swap(0, last);
        sift_down(seq, 0, last, &mut cmp);
    }
}

/// Restores the heap property at `parent` within the heap prefix `seq[..heap_len]`.
fn sift_down<T, F>(seq: &mut [T], parent: usize, heap_len: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let larger = larger_child(seq, parent, heap_len, cmp);
    if larger != parent {
        seq.swap(parent, larger);
        sift_down(seq, larger, heap_len, cmp);
    }
}

/// Index of the largest of `parent` and its in-heap children (`parent` on ties).
fn larger_child<T, F>(seq: &[T], parent: usize, heap_len: usize, cmp: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut larger = parent;
    for child in [2 * parent + 1, 2 * parent + 2] {
        if child < heap_len && cmp(&seq[child], &seq[larger]) == Ordering::Greater {
            larger = child;
        }
    }
    larger
}
