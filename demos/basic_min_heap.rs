//! Example demonstrating the core MinHeap operations.
//!
//! Covers insert/peek/remove, linear-time heapify, and the pushpop fast path
//! that hands back values smaller than the current minimum untouched.
//!
//! Run with: cargo run --example basic_min_heap

use heapkit::ds::{IntMinHeap, MinHeap};

fn main() {
    println!("=== MinHeap Example ===\n");

    let mut heap = IntMinHeap::new();
    for v in [10, 3, 7, 1] {
        heap.insert(v);
        println!("insert({:>2}) -> peek = {:?}, len = {}", v, heap.peek(), heap.len());
    }

    println!("\nDraining:");
    while let Some(v) = heap.remove() {
        println!("  remove() -> {}", v);
    }
    println!("  remove() on empty -> {:?}", heap.remove());

    println!("\n=== Heapify ===\n");
    let input = vec![9, 4, 7, 1, -2, 6, 5];
    println!("input:         {:?}", input);
    let heap = MinHeap::heapify(input);
    println!("storage order: {:?}", heap.as_slice());
    println!("sorted:        {:?}", heap.into_sorted_vec());

    println!("\n=== Pushpop ===\n");
    let mut heap = IntMinHeap::heapify(vec![10, 20, 30]);
    println!("heap: {:?}", heap.as_slice());
    println!(
        "pushpop(5)  -> {} (smaller than root, heap untouched: {:?})",
        heap.pushpop(5),
        heap.as_slice()
    );
    println!(
        "pushpop(25) -> {} (root replaced, new min {:?})",
        heap.pushpop(25),
        heap.peek()
    );
}
