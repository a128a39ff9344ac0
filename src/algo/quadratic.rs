//! Selection, bubble and insertion sort.
//!
//! None of these allocate and none can fail. Slices of length 0 or 1 are left
//! untouched.

use std::cmp::Ordering;

/// Sorts the slice in ascending order with selection sort.
///
/// O(n²) comparisons, at most `n - 1` swaps. Not stable.
///
/// ```
/// let mut data = [5, 3, 8, 1, 9, 2];
/// classort::selection_sort(&mut data);
/// assert_eq!(data, [1, 2, 3, 5, 8, 9]);
/// ```
pub fn selection_sort<T: Ord>(seq: &mut [T]) {
    selection_sort_by(seq, T::cmp);
}

/// Selection sort with a custom comparator.
pub fn selection_sort_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    for i in 0..len.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..len {
            if cmp(&seq[j], &seq[min]) == Ordering::Less {
                min = j;
            }
        }
        seq.swap(i, min);
    }
}

/// Sorts the slice in ascending order with bubble sort.
///
/// Always performs the full `n - 1` passes, even on sorted input. Stable.
pub fn bubble_sort<T: Ord>(seq: &mut [T]) {
    bubble_sort_by(seq, T::cmp);
}

/// Bubble sort with a custom comparator.
pub fn bubble_sort_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = seq.len();
    for pass in 0..len.saturating_sub(1) {
        for j in 0..len - pass - 1 {
            if cmp(&seq[j], &seq[j + 1]) == Ordering::Greater {
                seq.swap(j, j + 1);
            }
        }
    }
}

/// Sorts the slice in ascending order with insertion sort.
///
/// O(n²) worst case, O(n) on already sorted input. Stable.
pub fn insertion_sort<T: Ord>(seq: &mut [T]) {
    insertion_sort_by(seq, T::cmp);
}

/// Insertion sort with a custom comparator.
///
/// Each element is shifted left past every predecessor that compares strictly
/// greater, so equal elements keep their input order.
pub fn insertion_sort_by<T, F>(seq: &mut [T], mut cmp: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..seq.len() {
        let mut j = i;
        while j > 0 && cmp(&seq[j], &seq[j - 1]) == Ordering::Less {
            seq.swap(j, j - 1);
            j -= 1;
        }
    }
}
