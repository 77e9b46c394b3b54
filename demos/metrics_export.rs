//! Example: collect heap operation counters and export them.
//!
//! Run with: cargo run --example metrics_export --features metrics

use heapkit::ds::IntMinHeap;
use heapkit::metrics::{MetricsExporter, MetricsSnapshotProvider, PrometheusTextExporter};

fn main() {
    let mut heap = IntMinHeap::heapify((0..64).rev().collect());

    for v in 0..32 {
        heap.insert(v * 3);
    }
    for v in [-1, 50, 200] {
        let _ = heap.pushpop(v);
    }
    while heap.len() > 16 {
        let _ = heap.remove();
    }
    let _ = heap.peek();

    let exporter = PrometheusTextExporter::new("heapkit", std::io::stdout());
    exporter.export(&heap.snapshot());
}
