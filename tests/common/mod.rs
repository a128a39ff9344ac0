#![allow(dead_code)]

use classort::prelude::*;

pub type SortFn = fn(&mut [i32]);

/// Every sort in the crate, wrapped to a common signature.
pub fn all_sorts() -> Vec<(&'static str, SortFn)> {
    vec![
        ("selection", selection_sort as SortFn),
        ("bubble", bubble_sort as SortFn),
        ("insertion", insertion_sort as SortFn),
        ("counting", (|s: &mut [i32]| counting_sort(s).unwrap()) as SortFn),
        ("radix", (|s: &mut [i32]| radix_sort(s).unwrap()) as SortFn),
        ("merge", (|s: &mut [i32]| merge_sort(s).unwrap()) as SortFn),
        ("quick", quick_sort as SortFn),
        (
            "quick_by",
            (|s: &mut [i32]| quick_sort_by(s, |a: &i32, b: &i32| a.cmp(b))) as SortFn,
        ),
        ("heap", heap_sort as SortFn),
    ]
}

/// Sorts that accept negative keys (everything except radix).
pub fn signed_sorts() -> Vec<(&'static str, SortFn)> {
    all_sorts()
        .into_iter()
        .filter(|(name, _)| *name != "radix")
        .collect()
}

/// Sorts with O(n log n) or linear running time.
pub fn fast_sorts() -> Vec<(&'static str, SortFn)> {
    all_sorts()
        .into_iter()
        .filter(|(name, _)| !matches!(*name, "selection" | "bubble" | "insertion"))
        .collect()
}
