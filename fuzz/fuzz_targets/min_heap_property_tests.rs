#![no_main]

use heapkit::ds::MinHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for MinHeap
//
// Tests specific invariants and properties:
// - Removal order is the sorted input (insert path)
// - heapify then drain equals sorted input
// - pushpop is equivalent to insert followed by remove
// - Empty heap queries do not mutate
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 4;

    match test_type {
        0 => test_insert_drain_sorted(&data[1..]),
        1 => test_heapify_drain_sorted(&data[1..]),
        2 => test_pushpop_equivalence(&data[1..]),
        3 => test_empty_queries(&data[1..]),
        _ => unreachable!(),
    }
});

fn values(data: &[u8]) -> Vec<i8> {
    data.iter().map(|&b| b as i8).collect()
}

// Property: inserting then draining yields the sorted multiset
fn test_insert_drain_sorted(data: &[u8]) {
    let input = values(data);
    let mut heap = MinHeap::new();
    for &v in &input {
        heap.insert(v);
    }

    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), expected);
}

// Property: heapify then draining yields the sorted multiset
fn test_heapify_drain_sorted(data: &[u8]) {
    let input = values(data);
    let heap = MinHeap::heapify(input.clone());
    heap.check_invariants().unwrap();
    assert_eq!(heap.len(), input.len());

    let mut expected = input;
    expected.sort_unstable();
    assert_eq!(heap.into_sorted_vec(), expected);
}

// Property: pushpop(v) == insert(v); remove()
fn test_pushpop_equivalence(data: &[u8]) {
    let Some((&probe, rest)) = data.split_last() else {
        return;
    };
    let probe = probe as i8;
    let seed = values(rest);

    let mut fused = MinHeap::heapify(seed.clone());
    let mut split = MinHeap::heapify(seed);

    let out = fused.pushpop(probe);
    split.insert(probe);
    assert_eq!(Some(out), split.remove());

    fused.check_invariants().unwrap();
    assert_eq!(fused.into_sorted_vec(), split.into_sorted_vec());
}

// Property: draining past empty keeps returning None without side effects
fn test_empty_queries(data: &[u8]) {
    let mut heap = MinHeap::heapify(values(data));
    while heap.remove().is_some() {}

    for _ in 0..4 {
        assert_eq!(heap.remove(), None);
        assert_eq!(heap.peek(), None);
        assert_eq!(heap.len(), 0);
    }
}
