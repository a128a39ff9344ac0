use std::collections::VecDeque;

use classort::core::{ByteRecords, RecordAccess};
use classort::prelude::*;

// Simulate an external columnar store that only exposes index-based access.
struct MockColumn {
    keys: Vec<u64>,
    labels: Vec<&'static str>,
}

// Implement RecordAccess for the external struct.
// This proves the trait is implementable by "outside crates".
impl RecordAccess for MockColumn {
    type Record = u64;

    fn record(&self, index: usize) -> &u64 {
        &self.keys[index]
    }

    fn swap_records(&mut self, a: usize, b: usize) {
        self.keys.swap(a, b);
        self.labels.swap(a, b);
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[test]
fn test_external_struct_compatibility() {
    let mut column = MockColumn {
        keys: vec![30, 10, 20],
        labels: vec!["c", "a", "b"],
    };
    quick_sort_by(&mut column, |a: &u64, b: &u64| a.cmp(b));

    assert_eq!(column.keys, vec![10, 20, 30]);
    assert_eq!(column.labels, vec!["a", "b", "c"]);
}

#[test]
fn test_vec_deque() {
    let mut input: VecDeque<i32> = VecDeque::from(vec![3, 1, 2]);
    input.push_front(9);
    quick_sort_by(&mut input, |a: &i32, b: &i32| a.cmp(b));
    assert_eq!(input, VecDeque::from(vec![1, 2, 3, 9]));
}

#[test]
fn test_byte_records_i32() {
    let values = [5i32, -3, 8, 1, 9, 2];
    let mut raw: Vec<u8> = values.iter().flat_map(|v| v.to_ne_bytes()).collect();

    let mut records = ByteRecords::new(&mut raw, size_of::<i32>()).unwrap();
    assert_eq!(records.len(), values.len());
    quick_sort_by(&mut records, |a: &[u8], b: &[u8]| {
        let a = i32::from_ne_bytes(a.try_into().unwrap());
        let b = i32::from_ne_bytes(b.try_into().unwrap());
        a.cmp(&b)
    });

    let sorted: Vec<i32> = raw
        .chunks_exact(4)
        .map(|c| i32::from_ne_bytes(c.try_into().unwrap()))
        .collect();
    assert_eq!(sorted, vec![-3, 1, 2, 5, 8, 9]);
}

#[test]
fn test_byte_records_wide() {
    // 3-byte records compared lexicographically, sorted descending.
    let mut raw = *b"abcxyzmnoabd";
    let mut records = ByteRecords::new(&mut raw, 3).unwrap();
    assert_eq!(records.width(), 3);
    quick_sort_by(&mut records, |a: &[u8], b: &[u8]| b.cmp(a));
    assert_eq!(records.into_inner(), b"xyzmnoabdabc");
}

#[test]
fn test_byte_records_invalid_width() {
    let mut raw = [0u8; 10];
    assert_eq!(
        ByteRecords::new(&mut raw, 0).unwrap_err(),
        SortError::InvalidRecordWidth { width: 0, len: 10 }
    );
    assert_eq!(
        ByteRecords::new(&mut raw, 3).unwrap_err(),
        SortError::InvalidRecordWidth { width: 3, len: 10 }
    );

    let mut empty: [u8; 0] = [];
    let records = ByteRecords::new(&mut empty, 4).unwrap();
    assert!(records.is_empty());
}
