//! # Metrics Traits
//!
//! Recording is split from consumption:
//!
//! - [`CoreMetricsRecorder`] / [`HeapMetricsRecorder`]: counters bumped by
//!   mutating heap operations.
//! - [`HeapMetricsReadRecorder`]: counters bumped from `&self` methods via
//!   interior mutability.
//! - [`MetricsSnapshotProvider`], [`MetricsReset`]: read and reset, for
//!   tests and benchmark iterations.
//! - [`MetricsExporter`]: publish a snapshot to a monitoring backend.

/// Counters shared by every mutating container operation.
pub trait CoreMetricsRecorder {
    fn record_insert_call(&mut self);
    fn record_grow(&mut self);
    fn record_clear(&mut self);
}

/// Heap-specific counters.
pub trait HeapMetricsRecorder: CoreMetricsRecorder {
    fn record_remove_call(&mut self);
    fn record_remove_found(&mut self);
    fn record_remove_empty(&mut self);
    fn record_pushpop_call(&mut self);
    fn record_pushpop_fast_path(&mut self);
    fn record_heapify(&mut self, elements: usize);
    fn record_sift_up_steps(&mut self, steps: u32);
    fn record_sift_down_steps(&mut self, steps: u32);
}

/// Read-only heap counters for `&self` methods.
pub trait HeapMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Reset metrics between tests or benchmark iterations.
pub trait MetricsReset {
    fn reset_metrics(&mut self);
}

/// Export/publish metrics to production monitoring backends.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
