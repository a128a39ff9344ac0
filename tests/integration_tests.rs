mod common;

use classort::prelude::*;
use common::{all_sorts, signed_sorts};

#[test]
fn test_basic_sort() {
    for (name, sort) in all_sorts() {
        let mut data = [5, 3, 8, 1, 9, 2];
        sort(&mut data);
        assert_eq!(data, [1, 2, 3, 5, 8, 9], "{name}");
    }
}

#[test]
fn test_single_element() {
    for (name, sort) in all_sorts() {
        let mut data = [1];
        sort(&mut data);
        assert_eq!(data, [1], "{name}");
    }
}

#[test]
fn test_empty() {
    for (name, sort) in all_sorts() {
        let mut data: [i32; 0] = [];
        sort(&mut data);
        assert!(data.is_empty(), "{name}");
    }
}

#[test]
fn test_all_equal() {
    for (name, sort) in all_sorts() {
        let mut data = [4, 4, 4, 4];
        sort(&mut data);
        assert_eq!(data, [4, 4, 4, 4], "{name}");
    }
}

#[test]
fn test_distribution_example() {
    let expected = [2, 24, 45, 66, 75, 90, 170, 802];

    let mut data = [170, 45, 75, 90, 802, 24, 2, 66];
    radix_sort(&mut data).unwrap();
    assert_eq!(data, expected);

    let mut data = [170, 45, 75, 90, 802, 24, 2, 66];
    counting_sort(&mut data).unwrap();
    assert_eq!(data, expected);
}

#[test]
fn test_sorted_and_reversed() {
    for (name, sort) in all_sorts() {
        let mut input: Vec<i32> = (0..64).collect();
        sort(&mut input);
        assert_eq!(input, (0..64).collect::<Vec<_>>(), "{name} sorted");

        let mut input: Vec<i32> = (0..64).rev().collect();
        sort(&mut input);
        assert_eq!(input, (0..64).collect::<Vec<_>>(), "{name} reversed");
    }
}

#[test]
fn test_negative_keys() {
    for (name, sort) in signed_sorts() {
        let mut data = [3, -7, 0, -250, 12, -1, 250, -7];
        sort(&mut data);
        assert_eq!(data, [-250, -7, -7, -1, 0, 3, 12, 250], "{name}");
    }
}

#[test]
fn test_extreme_keys() {
    // Counting sort is left out: this span needs 2^32 counters.
    for (name, sort) in signed_sorts().into_iter().filter(|(n, _)| *n != "counting") {
        let mut data = [3, i32::MIN, 0, i32::MAX, -1, i32::MIN];
        sort(&mut data);
        assert_eq!(data, [i32::MIN, i32::MIN, -1, 0, 3, i32::MAX], "{name}");
    }

    let mut data = [i32::MIN + 2, i32::MIN, i32::MIN + 1];
    counting_sort(&mut data).unwrap();
    assert_eq!(data, [i32::MIN, i32::MIN + 1, i32::MIN + 2]);
}

#[test]
fn test_radix_large_keys() {
    // Ten decimal digits: the last divisor would overflow an i32.
    let mut data = [i32::MAX, 1_000_000_000, 0, 999_999_999, 2_000_000_000];
    radix_sort(&mut data).unwrap();
    assert_eq!(data, [0, 999_999_999, 1_000_000_000, 2_000_000_000, i32::MAX]);
}

#[test]
fn test_radix_rejects_negative_keys() {
    let mut data = [5, 2, -3, 8, -1];
    let err = radix_sort(&mut data).unwrap_err();
    assert_eq!(err, SortError::NegativeKey { index: 2, value: -3 });
    // Checked before any pass runs.
    assert_eq!(data, [5, 2, -3, 8, -1]);
}

#[test]
fn test_counting_sort_narrow_window() {
    let base = 1_000_000;
    let mut data = [base + 3, base, base + 1, base + 3, base + 2];
    counting_sort(&mut data).unwrap();
    assert_eq!(data, [base, base + 1, base + 2, base + 3, base + 3]);
}

#[test]
fn test_quick_sort_reversed_comparator() {
    let mut data = vec![5, 3, 8, 1, 9, 2];
    quick_sort_by(&mut data, |a: &i32, b: &i32| b.cmp(a));
    assert_eq!(data, vec![9, 8, 5, 3, 2, 1]);
}

#[test]
fn test_comparator_variants() {
    use classort::{
        bubble_sort_by, heap_sort_by, insertion_sort_by, merge_sort_by, selection_sort_by,
    };

    let desc = |a: &i32, b: &i32| b.cmp(a);
    let expected = [9, 8, 5, 3, 2, 1];

    let mut data = [5, 3, 8, 1, 9, 2];
    selection_sort_by(&mut data, desc);
    assert_eq!(data, expected);

    let mut data = [5, 3, 8, 1, 9, 2];
    bubble_sort_by(&mut data, desc);
    assert_eq!(data, expected);

    let mut data = [5, 3, 8, 1, 9, 2];
    insertion_sort_by(&mut data, desc);
    assert_eq!(data, expected);

    let mut data = [5, 3, 8, 1, 9, 2];
    heap_sort_by(&mut data, desc);
    assert_eq!(data, expected);

    let mut data = [5, 3, 8, 1, 9, 2];
    merge_sort_by(&mut data, desc).unwrap();
    assert_eq!(data, expected);
}

#[test]
fn test_generic_element_types() {
    let mut words = vec!["pear", "apple", "fig", "banana"];
    heap_sort(&mut words);
    assert_eq!(words, vec!["apple", "banana", "fig", "pear"]);

    let mut words: Vec<String> = ["delta", "alpha", "charlie", "bravo"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    merge_sort(&mut words).unwrap();
    assert_eq!(words, vec!["alpha", "bravo", "charlie", "delta"]);

    let mut pairs = [(2, 'b'), (1, 'z'), (2, 'a'), (1, 'y')];
    quick_sort(&mut pairs);
    assert_eq!(pairs, [(1, 'y'), (1, 'z'), (2, 'a'), (2, 'b')]);
}

#[test]
fn test_error_display() {
    let err = SortError::NegativeKey { index: 4, value: -9 };
    assert!(err.to_string().contains("-9"));

    let err = SortError::AllocationFailure { requested: 12 };
    assert!(err.to_string().contains("12"));

    let boxed: Box<dyn std::error::Error> =
        Box::new(SortError::InvalidRecordWidth { width: 0, len: 8 });
    assert!(boxed.to_string().contains("width"));
}
