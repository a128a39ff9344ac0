//! Sorting and searching algorithms.
//!
//! - [`quadratic`]: selection, bubble and insertion sort.
//! - [`distribution`]: counting sort and base-10 LSD radix sort for `i32` keys.
//! - [`merge`]: top-down merge sort.
//! - [`quick`]: Lomuto quicksort over any [`RecordAccess`](crate::core::RecordAccess).
//! - [`heap`]: in-place max-heap sort.
//! - [`search`]: iterative and recursive binary search.
//!
//! Sorts that need scratch memory return `Result<(), SortError>`; the rest cannot fail.
//! Every sort treats slices of length 0 or 1 as already sorted.

pub mod distribution;
pub mod heap;
pub mod merge;
pub mod quadratic;
pub mod quick;
pub mod search;

pub use distribution::{counting_sort, counting_sort_by_key, radix_sort, radix_sort_by_key};
pub use heap::{heap_sort, heap_sort_by};
pub use merge::{merge_sort, merge_sort_by};
pub use quadratic::{
    bubble_sort, bubble_sort_by, insertion_sort, insertion_sort_by, selection_sort,
    selection_sort_by,
};
pub use quick::{quick_sort, quick_sort_by};
pub use search::{
    binary_search_iterative, binary_search_iterative_by, binary_search_recursive,
    binary_search_recursive_by,
};
