//! heapkit: an array-backed binary min-heap with linear-time construction.
//!
//! - [`ds::MinHeap`]: the priority queue (`insert`, `peek`, `remove`,
//!   `pushpop`, `heapify`).
//! - [`ds::HeapBuffer`]: the owned, doubling storage underneath it.
//! - [`ds::sift`]: index arithmetic and the sift-up / sift-down primitives.
//!
//! Enable the `metrics` feature for per-heap operation counters and a
//! Prometheus text exporter.

pub mod ds;
pub mod error;

#[cfg(feature = "metrics")]
pub mod metrics;

pub mod prelude;
