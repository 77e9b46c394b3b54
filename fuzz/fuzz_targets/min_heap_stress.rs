#![no_main]

use heapkit::ds::MinHeap;
use libfuzzer_sys::fuzz_target;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Fuzz stress test with reference validation
//
// Drives MinHeap and std's BinaryHeap<Reverse<_>> with the same operations
// and requires identical observable results at every step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: MinHeap<u32> = MinHeap::new();
    let mut reference: BinaryHeap<Reverse<u32>> = BinaryHeap::new();

    for chunk in data.chunks(3) {
        if chunk.len() < 2 {
            break;
        }

        let op = chunk[0] % 4;
        let low = chunk.get(2).copied().unwrap_or(0);
        let value = (u32::from(chunk[1]) << 8) | u32::from(low);

        match op {
            0 | 1 => {
                heap.insert(value);
                reference.push(Reverse(value));
            }
            2 => {
                let got = heap.remove();
                let want = reference.pop().map(|Reverse(v)| v);
                assert_eq!(got, want);
            }
            3 => {
                let got = heap.pushpop(value);
                let want = match reference.peek() {
                    Some(&Reverse(min)) if min <= value => {
                        reference.pop();
                        reference.push(Reverse(value));
                        min
                    }
                    _ => value,
                };
                assert_eq!(got, want);
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), reference.len());
        assert_eq!(heap.peek().copied(), reference.peek().map(|&Reverse(v)| v));
    }
});
