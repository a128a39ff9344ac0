//! Generic quicksort over any [`RecordAccess`] sequence.
//!
//! Uses a Lomuto partition with the last record of each range as pivot. There is no
//! pivot sampling, so sorted or reverse-sorted input takes O(n²) comparisons. The stack
//! stays O(log n) because only the smaller side is recursed into.

use std::cmp::Ordering;
use std::ops::Range;

use crate::core::RecordAccess;

/// Sorts the slice in ascending order with quicksort.
///
/// Not stable, no allocation.
///
/// ```
/// let mut data = [5, 3, 8, 1, 9, 2];
/// classort::quick_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn quick_sort<T: Ord>(seq: &mut [T]) {
    quick_sort_by(seq, T::cmp);
}

/// Sorts any record sequence by a caller-supplied three-way comparator.
///
/// The order is entirely the comparator's: a record ends up before the pivot when
/// `cmp(pivot, record)` is [`Ordering::Greater`]. Passing a reversed comparator
/// therefore sorts in descending order.
///
/// ```
/// use classort::quick_sort_by;
///
/// let mut data = vec![1, 5, 2, 4, 3];
/// quick_sort_by(&mut data, |a: &i32, b: &i32| b.cmp(a));
/// assert_eq!(data, [5, 4, 3, 2, 1]);
/// ```
pub fn quick_sort_by<S, F>(seq: &mut S, mut cmp: F)
where
    S: RecordAccess + ?Sized,
    F: FnMut(&S::Record, &S::Record) -> Ordering,
{
    let len = seq.len();
    sort_range(seq, 0..len, &mut cmp);
}

fn sort_range<S, F>(seq: &mut S, mut range: Range<usize>, cmp: &mut F)
where
    S: RecordAccess + ?Sized,
    F: FnMut(&S::Record, &S::Record) -> Ordering,
{
    while range.len() > 1 {
        let pivot = partition(seq, range.clone(), cmp);
        let low = range.start..pivot;
        let high = pivot + 1..range.end;

        if low.len() < high.len() {
            sort_range(seq, low, cmp);
            range = high;
        } else {
            sort_range(seq, high, cmp);
            range = low;
        }
    }
}

/// Lomuto partition of a range holding at least two records.
///
/// Returns the final position of the pivot. Records the pivot compares greater than
/// end up to its left.
fn partition<S, F>(seq: &mut S, range: Range<usize>, cmp: &mut F) -> usize
where
    S: RecordAccess + ?Sized,
    F: FnMut(&S::Record, &S::Record) -> Ordering,
{
    let pivot = range.end - 1;
    let mut boundary = range.start;

    for j in range.start..pivot {
        if cmp(seq.record(pivot), seq.record(j)) == Ordering::Greater {
            seq.swap_records(boundary, j);
            boundary += 1;
        }
    }
    seq.swap_records(boundary, pivot);

    boundary
}
