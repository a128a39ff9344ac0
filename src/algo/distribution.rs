//! Counting sort and LSD radix sort for `i32` keys.
//!
//! Both sorts are stable and share the same placement step:
//! 1. Count how many keys fall in each bucket.
//! 2. Turn the counts into exclusive prefix sums (the first slot of each bucket).
//! 3. Walk a copy of the input in order and write each element to its bucket's next
//!    free slot.
//!
//! Scratch space (the counts and the input copy) is reserved fallibly, so running out
//! of memory returns [`SortError::AllocationFailure`] instead of aborting.

use crate::error::SortError;
use crate::scratch;
use cuneiform::cuneiform;

/// Decimal radix.
const RADIX: usize = 10;

// Cache-aligned digit histogram.
#[cuneiform]
struct DigitCounts {
    data: [usize; RADIX],
}

/// Sorts `i32` keys with counting sort.
///
/// Runs in O(n + range) time and memory where `range = max - min + 1`. Callers are
/// responsible for keeping the range reasonable; a sparse slice spanning the whole
/// `i32` domain asks for billions of counters.
///
/// Nothing is written until both scratch buffers have been reserved, so on error the
/// slice is unchanged.
///
/// ```
/// let mut data = [170, 45, 75, 90, 802, 24, 2, 66];
/// classort::counting_sort(&mut data).unwrap();
/// assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
/// ```
pub fn counting_sort(seq: &mut [i32]) -> Result<(), SortError> {
    counting_sort_by_key(seq, |&k| k)
}

/// Stable counting sort of arbitrary elements by an `i32` key.
pub fn counting_sort_by_key<T, F>(seq: &mut [T], key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i32,
{
    let Some((min, max)) = key_bounds(seq, &key) else {
        return Ok(());
    };

    // Computed in i64 so the full i32 span does not overflow.
    let span = i64::from(max) - i64::from(min) + 1;
    let range = usize::try_from(span).map_err(|_| SortError::AllocationFailure {
        requested: usize::MAX,
    })?;

    let mut offsets = scratch::counts(range)?;
    let buffer = scratch::copy_of(seq)?;

    let slot = |item: &T| (i64::from(key(item)) - i64::from(min)) as usize;

    buffer.iter().for_each(|item| offsets[slot(item)] += 1);
    exclusive_prefix_sum(&mut offsets);

    buffer.iter().for_each(|item| {
        let pos = &mut offsets[slot(item)];
        seq[*pos] = item.clone();
        *pos += 1;
    });

    Ok(())
}

/// Sorts non-negative `i32` keys with a base-10 LSD radix sort.
///
/// One stable counting pass is made per decimal digit of the largest key.
///
/// # Errors
///
/// - [`SortError::NegativeKey`] if any key is negative. This is checked before the
///   slice is touched.
/// - [`SortError::AllocationFailure`] if a pass cannot reserve its scratch copy. Earlier
///   passes may already have reordered the slice; it is still a permutation of the
///   input but not necessarily sorted.
pub fn radix_sort(seq: &mut [i32]) -> Result<(), SortError> {
    radix_sort_by_key(seq, |&k| k)
}

/// Stable radix sort of arbitrary elements by a non-negative `i32` key.
pub fn radix_sort_by_key<T, F>(seq: &mut [T], key: F) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i32,
{
    if let Some((index, value)) = seq
        .iter()
        .map(&key)
        .enumerate()
        .find(|&(_, value)| value < 0)
    {
        return Err(SortError::NegativeKey { index, value });
    }

    let Some((_, max)) = key_bounds(seq, &key) else {
        return Ok(());
    };
    let max = i64::from(max);

    // i64 divisors: 10^10 would overflow an i32 on the last pass for large keys.
    let mut divisor = 1i64;
    while max / divisor > 0 {
        digit_pass(seq, &key, divisor)?;
        divisor *= RADIX as i64;
    }

    Ok(())
}

/// One stable counting pass on the decimal digit selected by `divisor`.
fn digit_pass<T, F>(seq: &mut [T], key: &F, divisor: i64) -> Result<(), SortError>
where
    T: Clone,
    F: Fn(&T) -> i32,
{
    let digit = |item: &T| ((i64::from(key(item)) / divisor) % RADIX as i64) as usize;

    let mut counts = DigitCounts { data: [0; RADIX] };
    let offsets = &mut counts.data;

    seq.iter().for_each(|item| offsets[digit(item)] += 1);
    exclusive_prefix_sum(&mut offsets[..]);

    let buffer = scratch::copy_of(seq)?;
    buffer.iter().for_each(|item| {
        let pos = &mut offsets[digit(item)];
        seq[*pos] = item.clone();
        *pos += 1;
    });

    Ok(())
}

/// Replaces each count with the number of keys in all earlier buckets.
fn exclusive_prefix_sum(counts: &mut [usize]) {
    let mut sum = 0;
    counts.iter_mut().for_each(|count| {
        let here = *count;
        *count = sum;
        sum += here;
    });
}

/// Smallest and largest key, or `None` for fewer than two elements.
fn key_bounds<T, F>(seq: &[T], key: &F) -> Option<(i32, i32)>
where
    F: Fn(&T) -> i32,
{
    if seq.len() < 2 {
        return None;
    }
    seq.iter().map(key).fold(None, |bounds, k| match bounds {
        None => Some((k, k)),
        Some((lo, hi)) => Some((lo.min(k), hi.max(k))),
    })
}
