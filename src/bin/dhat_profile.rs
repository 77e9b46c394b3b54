//! DHAT heap profiler for heapkit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use heapkit::ds::MinHeap;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }
}

/// Grow from empty one insert at a time; exercises the doubling policy.
fn profile_insert_growth() {
    println!("=== Profiling insert growth ===");
    let operations = 100_000;
    let mut rng = XorShift64::new(42);

    let mut heap = MinHeap::new();
    for _ in 0..operations {
        heap.insert(rng.next_i64());
    }

    println!("  Final size: {}", heap.len());
    println!("  Capacity:   {}", heap.capacity());
}

/// Build in one step from a pre-filled vector; should reuse its allocation.
fn profile_heapify() {
    println!("=== Profiling heapify ===");
    let operations = 100_000;
    let mut rng = XorShift64::new(7);

    let values: Vec<i64> = (0..operations).map(|_| rng.next_i64()).collect();
    let heap = MinHeap::heapify(values);

    println!("  Final size: {}", heap.len());
    println!("  Capacity:   {}", heap.capacity());
}

/// Top-k selection via pushpop; the heap size stays fixed.
fn profile_pushpop_top_k() {
    println!("=== Profiling pushpop top-k ===");
    let k = 1024;
    let operations = 200_000;
    let mut rng = XorShift64::new(1234);

    let mut heap = MinHeap::with_capacity(k);
    for _ in 0..k {
        heap.insert(rng.next_i64());
    }
    for _ in 0..operations {
        let _ = heap.pushpop(rng.next_i64());
    }

    println!("  Final size: {}", heap.len());
    println!("  Capacity:   {}", heap.capacity());
}

/// Insert/remove churn around a steady-state size.
fn profile_churn() {
    println!("=== Profiling insert/remove churn ===");
    let operations = 100_000;
    let mut rng = XorShift64::new(99);

    let mut heap = MinHeap::new();
    for _ in 0..operations {
        if rng.next_u64() % 3 == 0 {
            let _ = heap.remove();
        } else {
            heap.insert(rng.next_i64());
        }
    }

    println!("  Final size: {}", heap.len());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("heapkit DHAT Heap Profiling");
    println!("===========================\n");

    profile_insert_growth();
    profile_heapify();
    profile_pushpop_top_k();
    profile_churn();

    println!("\n===========================");
    println!("Profile written to dhat-heap.json");
}
