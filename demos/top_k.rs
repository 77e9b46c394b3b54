//! Example: keep the k largest values of a stream with a bounded min-heap.
//!
//! The heap holds the current top-k; its root is the smallest of them. Each
//! new value goes through `pushpop`, which rejects anything below the root
//! without touching the heap.
//!
//! Run with: cargo run --example top_k

use heapkit::ds::MinHeap;

fn top_k<I: IntoIterator<Item = i64>>(stream: I, k: usize) -> Vec<i64> {
    let mut stream = stream.into_iter();
    let mut heap: MinHeap<i64> = stream.by_ref().take(k).collect();
    if heap.len() < k {
        return heap.into_sorted_vec();
    }

    let mut rejected = 0usize;
    for v in stream {
        let out = heap.pushpop(v);
        if out == v {
            rejected += 1;
        }
    }
    println!("  rejected without a sift: {}", rejected);
    heap.into_sorted_vec()
}

fn main() {
    println!("=== Top-K Example ===\n");

    // Deterministic pseudo-random stream
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let stream = (0..10_000).map(move |_| {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 1_000_000) as i64
    });

    let best = top_k(stream, 5);
    println!("  top 5 (ascending): {:?}", best);
}
