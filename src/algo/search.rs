//! Binary search over ascending slices.
//!
//! Both variants keep closed bounds `[start, end]` and probe `mid = (start + end) / 2`.
//! They return the index of *a* matching element; with duplicates, which one is
//! unspecified. Sortedness is not checked: on unsorted input the search still
//! terminates without panicking, but the answer is meaningless.

use std::cmp::Ordering;

/// Searches an ascending slice with a loop.
///
/// ```
/// use classort::binary_search_iterative;
///
/// let data = [10, 20, 30, 40, 50];
/// assert_eq!(binary_search_iterative(&data, &30), Some(2));
/// assert_eq!(binary_search_iterative(&data, &25), None);
/// ```
pub fn binary_search_iterative<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_iterative_by(seq, |probe| probe.cmp(target))
}

/// Iterative search driven by a probe closure.
///
/// `f` returns how the probed element orders relative to the target.
pub fn binary_search_iterative_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let (mut start, mut end) = (0, seq.len().checked_sub(1)?);

    while start <= end {
        let mid = start + (end - start) / 2;
        match f(&seq[mid]) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => start = mid + 1,
            Ordering::Greater => end = mid.checked_sub(1)?,
        }
    }

    None
}

/// Searches an ascending slice by recursion.
///
/// Recursion depth is O(log n).
pub fn binary_search_recursive<T: Ord>(seq: &[T], target: &T) -> Option<usize> {
    binary_search_recursive_by(seq, |probe| probe.cmp(target))
}

/// Recursive search driven by a probe closure.
pub fn binary_search_recursive_by<T, F>(seq: &[T], mut f: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let end = seq.len().checked_sub(1)?;
    search_between(seq, 0, end, &mut f)
}

fn search_between<T, F>(seq: &[T], start: usize, end: usize, f: &mut F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mid = start + (end - start) / 2;
    match f(&seq[mid]) {
        Ordering::Equal => Some(mid),
        _ if start == end => None,
        Ordering::Less => search_between(seq, mid + 1, end, f),
        Ordering::Greater if mid == start => None,
        Ordering::Greater => search_between(seq, start, mid - 1, f),
    }
}
