#![no_main]

use heapkit::ds::MinHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on MinHeap
//
// Tests random sequences of insert, remove, peek, pushpop, clear and rebuild
// operations, checking len bookkeeping and the heap property after each step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: MinHeap<i16> = MinHeap::new();
    let mut expected_len = 0usize;

    let mut idx = 0;
    while idx + 2 < data.len() {
        let op = data[idx] % 7;
        let value = i16::from_le_bytes([data[idx + 1], data[idx + 2]]);

        match op {
            0 => {
                // insert
                heap.insert(value);
                expected_len += 1;
                assert!(heap.peek().is_some_and(|min| *min <= value));
            }
            1 => {
                // remove
                let before = heap.peek().copied();
                let removed = heap.remove();
                assert_eq!(removed, before);
                if removed.is_some() {
                    expected_len -= 1;
                }
            }
            2 => {
                // peek (read-only)
                let len = heap.len();
                let _ = heap.peek();
                assert_eq!(heap.len(), len);
            }
            3 => {
                // pushpop
                let before = heap.peek().copied();
                let out = heap.pushpop(value);
                match before {
                    Some(min) if min <= value => assert_eq!(out, min),
                    _ => assert_eq!(out, value),
                }
            }
            4 => {
                // try_insert
                heap.try_insert(value).unwrap();
                expected_len += 1;
            }
            5 => {
                // clear
                heap.clear();
                expected_len = 0;
                assert_eq!(heap.peek(), None);
            }
            6 => {
                // rebuild from storage order
                let values = std::mem::take(&mut heap).into_vec();
                heap = MinHeap::heapify(values);
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), expected_len);
        assert_eq!(heap.is_empty(), expected_len == 0);
        heap.check_invariants().unwrap();

        idx += 3;
    }
});
