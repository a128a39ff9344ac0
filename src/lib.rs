//! # Classort
//!
//! `classort` is a reference library of the classic in-memory sorting and searching
//! algorithms, written to be read and benchmarked rather than to beat `slice::sort`.
//!
//! ## Algorithms
//!
//! | Family | Functions | Stable | Extra memory |
//! |---|---|---|---|
//! | Quadratic | [`selection_sort`] | no | none |
//! | Quadratic | [`bubble_sort`], [`insertion_sort`] | yes | none |
//! | Distribution | [`counting_sort`], [`radix_sort`] | yes | O(n + range), O(n) |
//! | Divide & conquer | [`merge_sort`], [`quick_sort`] | merge only | O(n), none |
//! | Heap | [`heap_sort`] | no | none |
//! | Search | [`binary_search_iterative`], [`binary_search_recursive`] | – | none |
//!
//! Sorts that allocate scratch space return `Result<(), SortError>` and report a failed
//! reservation as [`SortError::AllocationFailure`] rather than aborting.
//!
//! ## Usage
//!
//! ### Integer keys
//!
//! ```rust
//! use classort::prelude::*;
//!
//! let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
//! radix_sort(&mut data).unwrap();
//! assert_eq!(data, vec![2, 24, 45, 66, 75, 90, 170, 802]);
//!
//! assert_eq!(binary_search_iterative(&data, &90), Some(5));
//! assert_eq!(binary_search_recursive(&data, &91), None);
//! ```
//!
//! ### Custom orderings
//!
//! [`quick_sort_by`] sorts anything implementing [`RecordAccess`] with a three-way
//! comparator. The comparator alone decides the direction.
//!
//! ```rust
//! use classort::quick_sort_by;
//!
//! let mut words = vec!["pear", "fig", "banana"];
//! quick_sort_by(&mut words, |a: &&str, b: &&str| b.len().cmp(&a.len()));
//! assert_eq!(words, vec!["banana", "pear", "fig"]);
//! ```
//!
//! Raw fixed-width records can be sorted in place through [`ByteRecords`]:
//!
//! ```rust
//! use classort::{ByteRecords, quick_sort_by};
//!
//! let mut raw = *b"cbadbc";
//! let mut records = ByteRecords::new(&mut raw, 2).unwrap();
//! quick_sort_by(&mut records, |a: &[u8], b: &[u8]| a.cmp(b));
//! assert_eq!(&raw, b"adbccb");
//! ```
//!
//! ## Benchmark harness
//!
//! With the `harness` feature the [`harness`] module and the `classort-bench` binary
//! time every algorithm on seeded random input and verify the output.

pub mod algo;
pub mod core;
pub mod error;
#[cfg(feature = "harness")]
pub mod harness;
mod scratch;

pub use algo::{
    binary_search_iterative, binary_search_iterative_by, binary_search_recursive,
    binary_search_recursive_by, bubble_sort, bubble_sort_by, counting_sort, counting_sort_by_key,
    heap_sort, heap_sort_by, insertion_sort, insertion_sort_by, merge_sort, merge_sort_by,
    quick_sort, quick_sort_by, radix_sort, radix_sort_by_key, selection_sort, selection_sort_by,
};
pub use crate::core::{ByteRecords, RecordAccess};
pub use error::SortError;

pub mod prelude {
    pub use crate::algo::{
        binary_search_iterative, binary_search_recursive, bubble_sort, counting_sort, heap_sort,
        insertion_sort, merge_sort, quick_sort, quick_sort_by, radix_sort, selection_sort,
    };
    pub use crate::core::{ByteRecords, RecordAccess};
    pub use crate::error::SortError;
}
